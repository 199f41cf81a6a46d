use tracing::{debug, info};

use crate::{catalog::Catalog, catalog::CatalogEntry, sale::SaleRecord, usd::Usd};

/// The outcome of matching a set of sales against a catalog.
#[derive(Debug, Default, PartialEq)]
pub struct Aggregation {
    /// Sum of price × quantity over every resolved sale.
    pub total: Usd,
    /// One message per unresolved sale, in the order the sales were given.
    pub errors: Vec<String>,
}

/// Computes the total cost of `sales` at the prices listed in `catalog`.
///
/// Each sale is matched to the first catalog entry whose title is exactly
/// its product name. If that entry has a price, `price × quantity` is added
/// to the total. Otherwise the sale is unresolved: it adds nothing to the
/// total, and an error message naming the product is recorded instead.
/// Unresolved sales never stop processing.
///
/// # Examples
///
/// ```
/// # use compute_sales::{compute_total_sales, CatalogEntry, SaleRecord};
/// let catalog = vec![
///     CatalogEntry::new("Widget", 2.50),
///     CatalogEntry::new("Gadget", 10.0),
/// ];
/// let sales = vec![SaleRecord::new("Widget", 4), SaleRecord::new("Gizmo", 1)];
/// let result = compute_total_sales(&catalog, &sales);
/// assert_eq!(result.total.to_string(), "10.00");
/// assert_eq!(
///     result.errors,
///     vec!["Error: Product 'Gizmo' not found in catalog."]
/// );
/// ```
#[must_use]
pub fn compute_total_sales(catalog: &[CatalogEntry], sales: &[SaleRecord]) -> Aggregation {
    let catalog = Catalog::new(catalog);
    let mut result = Aggregation::default();
    for sale in sales {
        let name = sale.product_name();
        let price = sale.product_title().and_then(|p| catalog.price_of(p));
        match price {
            Some(price) => result.total += price * sale.quantity,
            None => {
                info!(product = %name, "product not found in catalog");
                result.errors.push(not_found(&name));
            }
        }
    }
    debug!(
        sales = sales.len(),
        products = catalog.len(),
        unresolved = result.errors.len(),
        total = %result.total,
        "aggregated sales"
    );
    result
}

fn not_found(name: &str) -> String {
    format!("Error: Product '{name}' not found in catalog.")
}
