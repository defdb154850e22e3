//! Render-ready output for one list item.

use serde::Serialize;

use shelfscan_core::ProductId;

use crate::image::ImageSource;
use crate::layout::WidthBucket;

/// Chevron shown on the expand toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpandIcon {
    ChevronDown,
    ChevronUp,
}

impl ExpandIcon {
    pub fn for_state(expanded: bool) -> Self {
        if expanded {
            ExpandIcon::ChevronUp
        } else {
            ExpandIcon::ChevronDown
        }
    }
}

/// Everything the renderer needs for one item; nothing is recomputed downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: ProductId,
    pub display_name: String,
    pub is_new: bool,
    pub is_long_name: bool,
    pub width_bucket: WidthBucket,
    pub width_px: u16,
    /// All parsed tags, regardless of expansion.
    pub tags: Vec<String>,
    /// Tags actually drawn: empty while collapsed.
    pub visible_tags: Vec<String>,
    pub expanded: bool,
    pub expand_icon: ExpandIcon,
    pub posted_label: String,
    pub image: ImageSource,
}
