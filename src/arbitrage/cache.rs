//! Caller-owned cache of reference prices keyed by product name.

use crate::amazon::ProductRecord;
use std::collections::HashMap;

/// A reference price and the listing it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePrice {
    pub price: f64,
    pub product: ProductRecord,
}

/// Reference prices observed so far. Entries never expire.
#[derive(Debug, Default)]
pub struct PriceCache {
    entries: HashMap<String, ReferencePrice>,
}

impl PriceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, product_name: &str) -> Option<&ReferencePrice> {
        self.entries.get(product_name)
    }

    pub fn insert(&mut self, product_name: impl Into<String>, price: ReferencePrice) {
        self.entries.insert(product_name.into(), price);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
