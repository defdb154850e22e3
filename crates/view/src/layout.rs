//! Width bucket for the name/date column.

use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthBucket {
    /// Leaves room for the "new" badge next to a long name.
    Narrow,
    Normal,
}

impl WidthBucket {
    pub fn px(self, config: &ViewConfig) -> u16 {
        match self {
            WidthBucket::Narrow => config.narrow_width_px,
            WidthBucket::Normal => config.normal_width_px,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WidthBucket::Narrow => "narrow",
            WidthBucket::Normal => "normal",
        }
    }
}

/// `Narrow` iff the product is both new and long-named.
pub fn width_bucket(is_new: bool, is_long_name: bool) -> WidthBucket {
    if is_new && is_long_name {
        WidthBucket::Narrow
    } else {
        WidthBucket::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_table() {
        assert_eq!(width_bucket(true, true), WidthBucket::Narrow);
        assert_eq!(width_bucket(true, false), WidthBucket::Normal);
        assert_eq!(width_bucket(false, true), WidthBucket::Normal);
        assert_eq!(width_bucket(false, false), WidthBucket::Normal);
    }

    #[test]
    fn pixel_widths_come_from_config() {
        let config = ViewConfig::default();
        assert_eq!(WidthBucket::Narrow.px(&config), 130);
        assert_eq!(WidthBucket::Normal.px(&config), 160);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WidthBucket::Narrow).unwrap(), "\"narrow\"");
        assert_eq!(WidthBucket::Normal.as_str(), "normal");
    }
}
