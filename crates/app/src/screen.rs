//! Home screen controller.

use std::sync::Arc;

use shelfscan_core::{Clock, ProductId};
use shelfscan_events::{NavigationEvent, NavigationEvents, Subscription};
use shelfscan_view::{InventoryListView, ItemRow, ViewConfig};

use crate::source::InventorySource;
use crate::store::{Completion, InventoryStore, refresh};

/// The inventory list screen.
///
/// While active, every focus event triggers a full refetch. Fetches are not
/// deduplicated or cancelled; the store's ticket ordering decides which response
/// wins. Rows are rebuilt from the store whenever a new inventory has landed, which
/// also collapses every item.
pub struct HomeScreen {
    store: Arc<InventoryStore>,
    source: Arc<dyn InventorySource>,
    clock: Arc<dyn Clock>,
    list: InventoryListView,
    seen_revision: u64,
    focus: Option<Subscription>,
}

impl HomeScreen {
    pub fn new(source: Arc<dyn InventorySource>, clock: Arc<dyn Clock>, config: Arc<ViewConfig>) -> Self {
        Self::with_store(Arc::new(InventoryStore::new()), source, clock, config)
    }

    pub fn with_store(
        store: Arc<InventoryStore>,
        source: Arc<dyn InventorySource>,
        clock: Arc<dyn Clock>,
        config: Arc<ViewConfig>,
    ) -> Self {
        Self {
            store,
            source,
            clock,
            list: InventoryListView::new(config),
            seen_revision: 0,
            focus: None,
        }
    }

    /// Start listening for focus events. Re-activating replaces the old listener.
    pub fn activate(&mut self, navigator: Arc<dyn NavigationEvents>) {
        if let Some(previous) = self.focus.take() {
            previous.cancel();
        }

        let store = Arc::clone(&self.store);
        let source = Arc::clone(&self.source);
        self.focus = Some(Subscription::register(navigator, NavigationEvent::Focus, move || {
            refresh(&store, source.as_ref());
        }));
    }

    /// Stop listening. Returns `false` if the screen was not active.
    pub fn teardown(&mut self) -> bool {
        match self.focus.take() {
            Some(subscription) => subscription.cancel(),
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.focus.as_ref().is_some_and(Subscription::is_active)
    }

    /// Pull-to-refresh: same fetch as a focus event, then pick up the result.
    pub fn refresh(&mut self) -> Completion {
        let completion = refresh(&self.store, self.source.as_ref());
        self.sync();
        completion
    }

    pub fn fetching(&self) -> bool {
        self.store.fetching()
    }

    pub fn last_error(&self) -> Option<String> {
        self.store.last_error()
    }

    pub fn store(&self) -> &Arc<InventoryStore> {
        &self.store
    }

    /// Rebuild the list if the store holds a newer inventory. Returns whether it did.
    pub fn sync(&mut self) -> bool {
        let revision = self.store.revision();
        if revision == self.seen_revision {
            return false;
        }

        self.list.replace(self.store.inventory());
        self.seen_revision = revision;
        true
    }

    pub fn list(&self) -> &InventoryListView {
        &self.list
    }

    /// Toggle the item for `id` on the current list; `None` if it is not shown.
    pub fn toggle(&mut self, id: &ProductId) -> Option<bool> {
        self.sync();
        self.list.toggle(id)
    }

    /// Render pass: pick up any new inventory, then derive every row against "now".
    pub fn rows(&mut self) -> Vec<ItemRow> {
        self.sync();
        self.list.render(self.clock.now())
    }
}

impl Drop for HomeScreen {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl core::fmt::Debug for HomeScreen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HomeScreen")
            .field("store", &self.store)
            .field("list", &self.list)
            .field("seen_revision", &self.seen_revision)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}
