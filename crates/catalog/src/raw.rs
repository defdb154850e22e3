//! Boundary decoding of exported records into typed [`Product`]s.
//!
//! The exporter emits `{"records": [{"id", "createdTime", "fields": {...}}]}` and omits
//! empty fields. Malformed records are rejected here so nothing downstream has to
//! guess at a missing name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shelfscan_core::ProductId;

use crate::posted::PostedAt;
use crate::product::{Product, ProductFields};

/// Why a single record (or a whole export) could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("record has no id")]
    MissingId,

    #[error("record {id} has no product name")]
    MissingName { id: String },

    #[error("record does not match the export schema: {0}")]
    InvalidRecord(String),

    #[error("malformed export: {0}")]
    Malformed(String),
}

/// Field bag exactly as exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFields {
    #[serde(rename = "Posted", default, skip_serializing_if = "Option::is_none")]
    pub posted: Option<String>,
    #[serde(rename = "Product Code", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "Product Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Product Image", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "Product Categories", default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
}

/// A record exactly as exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default)]
    pub fields: RawFields,
}

impl TryFrom<RawProduct> for Product {
    type Error = DecodeError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let id = ProductId::new(raw.id).map_err(|_| DecodeError::MissingId)?;

        let Some(name) = raw.fields.name else {
            return Err(DecodeError::MissingName { id: id.to_string() });
        };

        let created_time = raw
            .created_time
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        let fields = ProductFields {
            posted: PostedAt::parse(raw.fields.posted.as_deref().unwrap_or_default()),
            code: raw.fields.code.unwrap_or_default(),
            name,
            image: raw.fields.image.filter(|uri| !uri.is_empty()),
            categories: raw.fields.categories.unwrap_or_default(),
        };

        Ok(Product::new(id, fields).with_created_time(created_time))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Export {
    Records { records: Vec<serde_json::Value> },
    Bare(Vec<serde_json::Value>),
}

/// Result of decoding a whole export: accepted products in export order plus the
/// position and reason of every rejected record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedInventory {
    pub products: Vec<Product>,
    pub rejected: Vec<(usize, DecodeError)>,
}

/// Decode an export document (`{"records": [...]}` or a bare array).
///
/// Individual bad records are skipped and reported; only a document that is not an
/// export at all fails.
pub fn decode_export(json: &str) -> Result<DecodedInventory, DecodeError> {
    let export: Export =
        serde_json::from_str(json).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let records = match export {
        Export::Records { records } => records,
        Export::Bare(records) => records,
    };

    let mut decoded = DecodedInventory::default();
    for (index, raw) in records.into_iter().enumerate() {
        let product = serde_json::from_value::<RawProduct>(raw)
            .map_err(|e| DecodeError::InvalidRecord(e.to_string()))
            .and_then(Product::try_from);

        match product {
            Ok(product) => decoded.products.push(product),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping undecodable product record");
                decoded.rejected.push((index, err));
            }
        }
    }

    tracing::debug!(
        accepted = decoded.products.len(),
        rejected = decoded.rejected.len(),
        "decoded inventory export"
    );

    Ok(decoded)
}
