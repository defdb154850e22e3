//! Navigation lifecycle events (mechanics only).
//!
//! Screens learn that they became visible or were hidden through this interface. The
//! navigator owning the screen stack implements [`NavigationEvents`]; screens register
//! callbacks and hold a [`crate::Subscription`] that removes the callback again.
//!
//! Delivery is synchronous and unordered across listeners. Nothing here deduplicates
//! rapid repeated events: a screen focused twice in a row is told twice.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use shelfscan_core::ListenerId;

/// Lifecycle event kinds a screen can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationEvent {
    /// The screen became the visible, active screen.
    Focus,
    /// The screen stopped being the active screen.
    Blur,
}

impl NavigationEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationEvent::Focus => "focus",
            NavigationEvent::Blur => "blur",
        }
    }
}

/// Callback invoked on each matching event.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Listener registry for navigation events.
///
/// ## Contract
///
/// - `add_listener` always returns a fresh id, even if the registry is unusable; such a
///   listener is simply never called.
/// - `remove_listener` returns `true` only for the call that actually removed the
///   listener. Removing twice, or removing an unknown id, returns `false`.
/// - Implementations must be `Send + Sync`; listeners may be added or removed from any
///   thread, including from inside a listener.
pub trait NavigationEvents: Send + Sync {
    fn add_listener(&self, event: NavigationEvent, listener: Listener) -> ListenerId;

    fn remove_listener(&self, id: ListenerId) -> bool;
}

impl<N> NavigationEvents for Arc<N>
where
    N: NavigationEvents + ?Sized,
{
    fn add_listener(&self, event: NavigationEvent, listener: Listener) -> ListenerId {
        (**self).add_listener(event, listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        (**self).remove_listener(id)
    }
}
