//! Name-based deduplication of a fetched product list.

use std::collections::HashSet;

use crate::product::Product;

/// Streaming first-occurrence filter keyed by product name.
///
/// Names are compared verbatim: no case folding, no trimming.
#[derive(Debug, Default, Clone)]
pub struct InventoryDeduplicator {
    seen: HashSet<String>,
}

impl InventoryDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `name` is offered, `false` afterwards.
    pub fn admit(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_owned())
    }

    /// Number of distinct names admitted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Keep the first product for every distinct name, preserving scan order.
pub fn dedupe<I>(products: I) -> Vec<Product>
where
    I: IntoIterator<Item = Product>,
{
    let products = products.into_iter();
    let mut dedup = InventoryDeduplicator::new();
    let mut kept = Vec::with_capacity(products.size_hint().0);
    let mut scanned = 0usize;

    for product in products {
        scanned += 1;
        if dedup.admit(product.name()) {
            kept.push(product);
        }
    }

    tracing::trace!(scanned, kept = kept.len(), "deduplicated inventory by name");
    kept
}
