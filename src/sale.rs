use serde::{
    de::{self, Unexpected},
    Deserialize, Deserializer,
};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull, DeserializeAs};

use std::borrow::Cow;

/// Defines the JSON format for a sales record.
///
/// `Product` is kept as whatever JSON value the record holds, so a record
/// with an odd product reference (a number, say) is still read; it just
/// never matches a catalog title. A missing or `null` `Quantity` is read as
/// 0, and a whole-number float such as `2.0` is read as 2.
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SaleRecord {
    #[serde(rename = "Product")]
    pub product: Option<Value>,
    #[serde_as(as = "DefaultOnNull<WholeNumber>")]
    #[serde(rename = "Quantity", default)]
    pub quantity: i32,
}

impl SaleRecord {
    #[must_use]
    pub fn new(product: &str, quantity: i32) -> Self {
        Self {
            product: Some(Value::String(product.to_string())),
            quantity,
        }
    }

    /// Returns the product reference if it is a string, which is the only
    /// kind of reference that can match a catalog title.
    #[must_use]
    pub fn product_title(&self) -> Option<&str> {
        self.product.as_ref().and_then(Value::as_str)
    }

    /// Returns the product reference as written in the record.
    ///
    /// Strings are returned as-is, other JSON values as their JSON text, and
    /// a missing reference as an empty string.
    #[must_use]
    pub fn product_name(&self) -> Cow<'_, str> {
        match &self.product {
            None => Cow::Borrowed(""),
            Some(Value::String(name)) => Cow::Borrowed(name),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

/// Reads a JSON number with no fractional part as an `i32`.
struct WholeNumber;

impl<'de> DeserializeAs<'de, i32> for WholeNumber {
    fn deserialize_as<D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let qty = f64::deserialize(deserializer)?;
        if qty.fract() == 0.0 && qty >= f64::from(i32::MIN) && qty <= f64::from(i32::MAX) {
            #[allow(clippy::cast_possible_truncation)]
            Ok(qty as i32)
        } else {
            Err(de::Error::invalid_value(
                Unexpected::Float(qty),
                &"a whole-number quantity",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_record_ignoring_extra_fields() {
        let sale: SaleRecord = serde_json::from_str(
            r#"{"SALE_ID": 1, "SALE_Date": "12/01/23", "Product": "Rustic breakfast", "Quantity": 1}"#,
        )
        .unwrap();
        assert_eq!(sale, SaleRecord::new("Rustic breakfast", 1));
    }

    #[test]
    fn missing_quantity_defaults_to_zero() {
        let sale: SaleRecord = serde_json::from_str(r#"{"Product": "Widget"}"#).unwrap();
        assert_eq!(sale.quantity, 0);
    }

    #[test]
    fn null_quantity_defaults_to_zero() {
        let sale: SaleRecord =
            serde_json::from_str(r#"{"Product": "Widget", "Quantity": null}"#).unwrap();
        assert_eq!(sale.quantity, 0);
    }

    #[test]
    fn whole_number_float_quantity_is_accepted() {
        let sale: SaleRecord =
            serde_json::from_str(r#"{"Product": "Widget", "Quantity": 2.0}"#).unwrap();
        assert_eq!(sale, SaleRecord::new("Widget", 2));
    }

    #[test]
    fn fractional_quantity_is_rejected() {
        let result = serde_json::from_str::<SaleRecord>(r#"{"Product": "Widget", "Quantity": 2.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_product_renders_as_empty_name() {
        let sale: SaleRecord = serde_json::from_str(r#"{"Quantity": 3}"#).unwrap();
        assert_eq!(sale.product, None);
        assert_eq!(sale.product_title(), None);
        assert_eq!(sale.product_name(), "");
    }

    #[test]
    fn non_string_product_is_read_but_has_no_title() {
        let sale: SaleRecord =
            serde_json::from_str(r#"{"Product": 42, "Quantity": 1}"#).unwrap();
        assert_eq!(sale.product_title(), None);
        assert_eq!(sale.product_name(), "42");
    }
}
