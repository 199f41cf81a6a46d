use serde::Deserialize;

use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, Mul},
};

/// Represents an amount of money in USD currency.
///
/// The amount is stored internally as a floating-point number of dollars,
/// exactly as it appears in the catalog, but the [`Display`] implementation
/// formats it to 2 decimal places.
#[derive(Clone, Copy, Default, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Usd(f64);

impl From<f64> for Usd {
    fn from(dollars: f64) -> Self {
        Self(dollars)
    }
}

impl Debug for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<i32> for Usd {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Self(self.0 * f64::from(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_to_cents() {
        assert_eq!(Usd::from(10.0).to_string(), "10.00");
        assert_eq!(Usd::from(2.499).to_string(), "2.50");
        assert_eq!(Usd::default().to_string(), "0.00");
    }

    #[test]
    fn mul_by_quantity_scales_amount() {
        assert_eq!(Usd::from(2.5) * 4, Usd::from(10.0));
        assert_eq!(Usd::from(2.5) * 0, Usd::default());
        assert_eq!(Usd::from(2.5) * -2, Usd::from(-5.0));
    }

    #[test]
    fn add_assign_accumulates() {
        let mut total = Usd::default();
        total += Usd::from(1.25);
        total += Usd::from(3.75);
        assert_eq!(total, Usd::from(5.0));
    }

    #[test]
    fn deserializes_from_json_number() {
        let price: Usd = serde_json::from_str("13.99").unwrap();
        assert_eq!(price, Usd::from(13.99));
        let price: Usd = serde_json::from_str("7").unwrap();
        assert_eq!(price, Usd::from(7.0));
    }
}
