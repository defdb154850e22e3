//! Presentation constants.

use serde::{Deserialize, Serialize};

use shelfscan_core::{DomainError, DomainResult};

use crate::freshness::FRESHNESS_WINDOW_MS;
use crate::image::PLACEHOLDER_IMAGE;
use crate::label::{ELLIPSIS, LONG_NAME_AFTER, TRUNCATE_AFTER};

/// Every tunable the view pipeline consults.
///
/// Deserializes from a partial document; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// A product is "new" while `now - posted` is strictly below this.
    pub freshness_window_ms: i64,
    /// Collapsed labels longer than this many characters are cut.
    pub truncate_after: usize,
    /// Names longer than this many characters count as long for layout.
    ///
    /// Independent of `truncate_after`.
    pub long_name_after: usize,
    pub ellipsis: String,
    pub narrow_width_px: u16,
    pub normal_width_px: u16,
    /// Asset reference used when a product has no image.
    pub placeholder_image: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            freshness_window_ms: FRESHNESS_WINDOW_MS,
            truncate_after: TRUNCATE_AFTER,
            long_name_after: LONG_NAME_AFTER,
            ellipsis: ELLIPSIS.to_string(),
            narrow_width_px: 130,
            normal_width_px: 160,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl ViewConfig {
    /// Reject settings that would make every product permanently stale or hide the
    /// label entirely.
    pub fn validate(&self) -> DomainResult<()> {
        if self.freshness_window_ms <= 0 {
            return Err(DomainError::validation("freshness_window_ms must be positive"));
        }
        if self.truncate_after == 0 {
            return Err(DomainError::validation("truncate_after must be at least 1"));
        }
        Ok(())
    }
}
