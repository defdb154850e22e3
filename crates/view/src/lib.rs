//! View-model pipeline for the inventory screen.
//!
//! Turns a fetched product list into render-ready rows:
//!
//! - name-based deduplication (via `shelfscan-catalog`)
//! - freshness classification
//! - label truncation / expansion
//! - category tag parsing
//! - layout width selection
//!
//! Everything here is pure and synchronous; the only mutable state is the per-item
//! expand/collapse flag.

pub mod config;
pub mod date_label;
pub mod freshness;
pub mod image;
pub mod item;
pub mod label;
pub mod layout;
pub mod list;
pub mod row;
pub mod tags;

pub use config::ViewConfig;
pub use date_label::{INVALID_DATE, posted_label};
pub use freshness::{FRESHNESS_WINDOW_MS, is_new, is_new_within, is_posted_new};
pub use image::{ImageSource, PLACEHOLDER_IMAGE};
pub use item::ProductItemViewModel;
pub use label::{ELLIPSIS, LONG_NAME_AFTER, TRUNCATE_AFTER, display_name, is_long_name};
pub use layout::{WidthBucket, width_bucket};
pub use list::InventoryListView;
pub use row::{ExpandIcon, ItemRow};
pub use tags::parse_tags;
