//! `shelfscan-core`: shared building blocks for the inventory viewer.
//!
//! This crate contains **pure** primitives (no IO, no rendering concerns).

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ListenerId, ProductId};
