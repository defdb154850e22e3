//! In-memory navigator for tests/dev.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use shelfscan_core::ListenerId;

use crate::navigation::{Listener, NavigationEvent, NavigationEvents};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    /// Emit failed due to internal lock poisoning.
    #[error("navigator listener registry is poisoned")]
    Poisoned,
}

struct Registered {
    id: ListenerId,
    event: NavigationEvent,
    listener: Listener,
}

/// In-memory listener registry.
///
/// - No IO / no async
/// - Listeners run on the emitting thread, after the registry lock is released, so a
///   listener may unsubscribe itself or emit again.
#[derive(Default)]
pub struct InMemoryNavigator {
    listeners: Mutex<Vec<Registered>>,
}

impl InMemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke every listener registered for `event`; returns how many ran.
    pub fn emit(&self, event: NavigationEvent) -> Result<usize, NavigatorError> {
        let targets: Vec<Listener> = {
            let listeners = self.listeners.lock().map_err(|_| NavigatorError::Poisoned)?;
            listeners
                .iter()
                .filter(|r| r.event == event)
                .map(|r| Arc::clone(&r.listener))
                .collect()
        };

        tracing::trace!(event = event.as_str(), listeners = targets.len(), "emitting navigation event");

        for listener in &targets {
            listener();
        }
        Ok(targets.len())
    }

    pub fn listener_count(&self, event: NavigationEvent) -> usize {
        self.listeners
            .lock()
            .map(|listeners| listeners.iter().filter(|r| r.event == event).count())
            .unwrap_or(0)
    }
}

impl NavigationEvents for InMemoryNavigator {
    fn add_listener(&self, event: NavigationEvent, listener: Listener) -> ListenerId {
        let id = ListenerId::new();

        // A poisoned registry still hands out an id; the listener just never fires.
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(Registered { id, event, listener });
        }

        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let Ok(mut listeners) = self.listeners.lock() else {
            return false;
        };

        let before = listeners.len();
        listeners.retain(|r| r.id != id);
        listeners.len() != before
    }
}

impl core::fmt::Debug for InMemoryNavigator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let count = self.listeners.lock().map(|l| l.len()).unwrap_or(0);
        f.debug_struct("InMemoryNavigator")
            .field("listeners", &count)
            .finish()
    }
}
