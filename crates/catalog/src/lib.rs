//! Product catalog records as delivered by the fetch collaborator.
//!
//! This crate owns the typed `Product` record, the decoding of the raw exported
//! field bag into it, and the name-based deduplication of a fetched list. It is
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod dedupe;
pub mod posted;
pub mod product;
pub mod raw;

pub use dedupe::{InventoryDeduplicator, dedupe};
pub use posted::PostedAt;
pub use product::{Product, ProductFields};
pub use raw::{DecodeError, DecodedInventory, RawFields, RawProduct, decode_export};
