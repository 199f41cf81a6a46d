#![doc = include_str!("../README.md")]
mod aggregate;
mod catalog;
mod load;
mod report;
mod sale;
mod usd;

pub use aggregate::{compute_total_sales, Aggregation};
pub use catalog::{Catalog, CatalogEntry};
pub use load::{read_catalog, read_sales, LoadError};
pub use report::Report;
pub use sale::SaleRecord;
pub use usd::Usd;
