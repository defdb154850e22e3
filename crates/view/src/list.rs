//! The inventory list: one view model per surviving product.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use shelfscan_catalog::{Product, dedupe};
use shelfscan_core::ProductId;

use crate::config::ViewConfig;
use crate::item::ProductItemViewModel;
use crate::row::ItemRow;

/// Deduplicated, render-ready list for the home screen.
///
/// Every call to [`InventoryListView::replace`] rebuilds the items from scratch, so
/// expansion state never survives a refetch.
#[derive(Debug, Clone)]
pub struct InventoryListView {
    config: Arc<ViewConfig>,
    items: Vec<ProductItemViewModel>,
}

impl InventoryListView {
    pub fn new(config: Arc<ViewConfig>) -> Self {
        Self {
            config,
            items: Vec::new(),
        }
    }

    pub fn from_products(config: Arc<ViewConfig>, products: Vec<Product>) -> Self {
        let mut list = Self::new(config);
        list.replace(products);
        list
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Swap in a freshly delivered inventory (full replacement, not a diff).
    pub fn replace(&mut self, products: Vec<Product>) {
        let delivered = products.len();
        self.items = dedupe(products)
            .into_iter()
            .map(|p| ProductItemViewModel::new(p, Arc::clone(&self.config)))
            .collect();

        tracing::debug!(delivered, shown = self.items.len(), "inventory list replaced");
    }

    pub fn items(&self) -> &[ProductItemViewModel] {
        &self.items
    }

    pub fn get(&self, id: &ProductId) -> Option<&ProductItemViewModel> {
        self.items.iter().find(|item| item.product_id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Toggle the item showing product `id`; returns its new state.
    pub fn toggle(&mut self, id: &ProductId) -> Option<bool> {
        self.items
            .iter_mut()
            .find(|item| item.product_id() == id)
            .map(ProductItemViewModel::toggle_expansion)
    }

    /// Toggle by list position; returns the new state.
    pub fn toggle_at(&mut self, index: usize) -> Option<bool> {
        self.items
            .get_mut(index)
            .map(ProductItemViewModel::toggle_expansion)
    }

    pub fn render(&self, now: DateTime<Utc>) -> Vec<ItemRow> {
        self.items.iter().map(|item| item.render(now)).collect()
    }
}
