use std::path::PathBuf;

use thiserror::Error;

use shelfscan_catalog::DecodeError;
use shelfscan_core::DomainError;

/// Failure of a single inventory fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read inventory: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode inventory: {0}")]
    Decode(#[from] DecodeError),

    #[error("inventory source unavailable: {0}")]
    Unavailable(String),
}

/// Invalid environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no inventory given: pass a path or set SHELFSCAN_INVENTORY")]
    MissingInventory,

    #[error("SHELFSCAN_NOW is not an RFC 3339 instant: {value}")]
    InvalidNow { value: String },

    #[error("failed to read view config {path:?}: {source}")]
    ViewConfigUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid view config {path:?}: {source}")]
    ViewConfigInvalid {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("view config {path:?} rejected: {source}")]
    ViewConfigRejected { path: PathBuf, source: DomainError },

    #[error("invalid product id in SHELFSCAN_EXPAND: {0}")]
    InvalidExpandId(DomainError),
}
