//! Sequenced inventory store.
//!
//! Every fetch takes a ticket before it starts. Responses are applied only if their
//! ticket is newer than the last applied one, so a slow, older response can never
//! overwrite a fresher list. Each applied response replaces the whole inventory.

use std::sync::{PoisonError, RwLock};

use shelfscan_catalog::Product;

use crate::error::FetchError;
use crate::source::InventorySource;

/// Sequence number handed out when a fetch starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket {
    sequence: u64,
}

impl FetchTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// What the store did with a completed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The response became the current inventory.
    Applied { revision: u64 },
    /// A newer response was already applied; this one (success or failure) was dropped.
    Stale { last_applied: u64 },
    /// The fetch failed; the previous inventory is kept.
    Failed { message: String },
}

#[derive(Debug, Default)]
struct StoreState {
    next_sequence: u64,
    last_applied: u64,
    in_flight: usize,
    revision: u64,
    inventory: Vec<Product>,
    last_error: Option<String>,
}

/// In-memory inventory store shared by the screen and its focus listener.
#[derive(Debug, Default)]
pub struct InventoryStore {
    state: RwLock<StoreState>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as started and number it.
    pub fn begin_fetch(&self) -> FetchTicket {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.next_sequence += 1;
        state.in_flight += 1;

        let ticket = FetchTicket {
            sequence: state.next_sequence,
        };
        tracing::debug!(sequence = ticket.sequence, in_flight = state.in_flight, "inventory fetch started");
        ticket
    }

    /// Record the outcome of the fetch identified by `ticket`.
    pub fn complete(&self, ticket: FetchTicket, result: Result<Vec<Product>, FetchError>) -> Completion {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.in_flight = state.in_flight.saturating_sub(1);

        match result {
            Err(err) if ticket.sequence <= state.last_applied => {
                tracing::debug!(
                    sequence = ticket.sequence,
                    last_applied = state.last_applied,
                    error = %err,
                    "ignoring failure of a superseded inventory fetch"
                );
                Completion::Stale {
                    last_applied: state.last_applied,
                }
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(sequence = ticket.sequence, error = %message, "inventory fetch failed");
                state.last_error = Some(message.clone());
                Completion::Failed { message }
            }
            Ok(_) if ticket.sequence <= state.last_applied => {
                tracing::debug!(
                    sequence = ticket.sequence,
                    last_applied = state.last_applied,
                    "discarding stale inventory response"
                );
                Completion::Stale {
                    last_applied: state.last_applied,
                }
            }
            Ok(products) => {
                state.last_applied = ticket.sequence;
                state.revision += 1;
                state.last_error = None;
                tracing::info!(
                    sequence = ticket.sequence,
                    revision = state.revision,
                    products = products.len(),
                    "inventory replaced"
                );
                state.inventory = products;
                Completion::Applied {
                    revision: state.revision,
                }
            }
        }
    }

    /// `true` while any fetch is in flight.
    pub fn fetching(&self) -> bool {
        self.read(|s| s.in_flight > 0)
    }

    /// Increments once per applied response; `0` until the first one lands.
    pub fn revision(&self) -> u64 {
        self.read(|s| s.revision)
    }

    pub fn inventory(&self) -> Vec<Product> {
        self.read(|s| s.inventory.clone())
    }

    /// Message of the most recent failure, cleared by the next applied response.
    pub fn last_error(&self) -> Option<String> {
        self.read(|s| s.last_error.clone())
    }

    fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }
}

/// Run one full fetch against `source` and hand the result to `store`.
pub fn refresh<S>(store: &InventoryStore, source: &S) -> Completion
where
    S: InventorySource + ?Sized,
{
    let ticket = store.begin_fetch();
    let result = source.fetch();
    store.complete(ticket, result)
}
