use serde::Deserialize;

use std::collections::HashMap;

use crate::usd::Usd;

/// Defines the JSON format for a price catalog entry.
///
/// Only `title` and `price` are read; any other fields in the document are
/// ignored. Either may be missing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub title: Option<String>,
    pub price: Option<Usd>,
}

impl CatalogEntry {
    /// Creates an entry with both a title and a price.
    #[must_use]
    pub fn new(title: &str, price: f64) -> Self {
        Self {
            title: Some(title.to_string()),
            price: Some(Usd::from(price)),
        }
    }
}

/// Looks up catalog entries by exact (case-sensitive) title.
///
/// When several entries share a title, the first one in the catalog is the
/// one that counts, even if it has no price and a later one does.
#[derive(Debug, Default)]
pub struct Catalog<'a> {
    by_title: HashMap<&'a str, &'a CatalogEntry>,
}

impl<'a> Catalog<'a> {
    /// Indexes `entries` by title. Entries without a title are skipped.
    #[must_use]
    pub fn new(entries: &'a [CatalogEntry]) -> Self {
        let mut by_title = HashMap::with_capacity(entries.len());
        for entry in entries {
            if let Some(title) = entry.title.as_deref() {
                by_title.entry(title).or_insert(entry);
            }
        }
        Self { by_title }
    }

    /// Returns the first catalog entry titled `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a CatalogEntry> {
        self.by_title.get(name).copied()
    }

    /// Returns the unit price of `name`.
    ///
    /// This is `None` if the product isn't in the catalog, or if its first
    /// entry has no price.
    #[must_use]
    pub fn price_of(&self, name: &str) -> Option<Usd> {
        self.get(name).and_then(|entry| entry.price)
    }

    /// Returns the number of distinct titles in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }
}
