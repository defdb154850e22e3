//! Environment configuration for the `shelfscan` binary.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use shelfscan_core::{Clock, FixedClock, ProductId, SystemClock};
use shelfscan_view::ViewConfig;

use crate::error::ConfigError;

pub const ENV_INVENTORY: &str = "SHELFSCAN_INVENTORY";
pub const ENV_NOW: &str = "SHELFSCAN_NOW";
pub const ENV_VIEW_CONFIG: &str = "SHELFSCAN_VIEW_CONFIG";
pub const ENV_EXPAND: &str = "SHELFSCAN_EXPAND";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub inventory_path: Option<PathBuf>,
    /// Pinned "now"; the wall clock is used when unset.
    pub now: Option<DateTime<Utc>>,
    pub view: ViewConfig,
    /// Products rendered expanded.
    pub expand: Vec<ProductId>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let inventory_path = present(ENV_INVENTORY).map(PathBuf::from);

        let now = present(ENV_NOW)
            .map(|value| {
                DateTime::parse_from_rfc3339(value.trim())
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|_| ConfigError::InvalidNow { value })
            })
            .transpose()?;

        let view = match present(ENV_VIEW_CONFIG) {
            Some(path) => load_view_config(PathBuf::from(path))?,
            None => ViewConfig::default(),
        };

        let expand = present(ENV_EXPAND)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(|id| ProductId::new(id).map_err(ConfigError::InvalidExpandId))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            inventory_path,
            now,
            view,
            expand,
        })
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.now {
            Some(at) => Arc::new(FixedClock(at)),
            None => Arc::new(SystemClock),
        }
    }
}

fn load_view_config(path: PathBuf) -> Result<ViewConfig, ConfigError> {
    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(source) => return Err(ConfigError::ViewConfigUnreadable { path, source }),
    };

    let view: ViewConfig = match serde_json::from_str(&json) {
        Ok(view) => view,
        Err(source) => return Err(ConfigError::ViewConfigInvalid { path, source }),
    };

    match view.validate() {
        Ok(()) => Ok(view),
        Err(source) => Err(ConfigError::ViewConfigRejected { path, source }),
    }
}
