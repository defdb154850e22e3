//! Registration handle that guarantees a single unregistration.

use std::sync::Arc;

use shelfscan_core::ListenerId;

use crate::navigation::{Listener, NavigationEvent, NavigationEvents};

/// A live listener registration.
///
/// The listener is removed exactly once: by [`Subscription::cancel`] or, failing that,
/// when the handle is dropped. After either, the callback is never invoked again by
/// the registry.
pub struct Subscription {
    events: Arc<dyn NavigationEvents>,
    event: NavigationEvent,
    id: Option<ListenerId>,
}

impl Subscription {
    /// Register `listener` for `event` and return the handle owning the registration.
    pub fn register<F>(events: Arc<dyn NavigationEvents>, event: NavigationEvent, listener: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let id = events.add_listener(event, listener);
        tracing::debug!(listener_id = %id, event = event.as_str(), "navigation listener registered");

        Self {
            events,
            event,
            id: Some(id),
        }
    }

    pub fn event(&self) -> NavigationEvent {
        self.event
    }

    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Unregister now. Returns whether the registry still knew the listener.
    pub fn cancel(mut self) -> bool {
        self.release()
    }

    fn release(&mut self) -> bool {
        let Some(id) = self.id.take() else {
            return false;
        };

        let removed = self.events.remove_listener(id);
        tracing::debug!(
            listener_id = %id,
            event = self.event.as_str(),
            removed,
            "navigation listener cancelled"
        );
        removed
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
