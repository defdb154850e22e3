//! Navigation events for screens.
//!
//! A screen registers a callback for "became visible" and must unregister it exactly
//! once when torn down. [`Subscription`] owns that pairing.

pub mod in_memory;
pub mod navigation;
pub mod subscription;

pub use in_memory::{InMemoryNavigator, NavigatorError};
pub use navigation::{Listener, NavigationEvent, NavigationEvents};
pub use subscription::Subscription;
