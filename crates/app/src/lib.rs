//! `shelfscan-app`
//!
//! **Responsibility:** the home screen and the collaborators it talks to.
//!
//! This crate provides:
//! - the fetch collaborator contract ([`InventorySource`]) and two sources
//! - a sequenced in-memory store that applies fetch responses last-issued-wins
//! - the [`HomeScreen`] controller (focus-driven refetch, pull-to-refresh, rows)
//! - environment configuration for the `shelfscan` binary

pub mod config;
pub mod error;
pub mod screen;
pub mod source;
pub mod store;

pub use config::AppConfig;
pub use error::{ConfigError, FetchError};
pub use screen::HomeScreen;
pub use source::{InventorySource, JsonFileSource, StaticSource};
pub use store::{Completion, FetchTicket, InventoryStore, refresh};
