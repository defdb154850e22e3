//! Image reference handed to the image loader.

use serde::{Deserialize, Serialize};

/// Bundled asset shown when a product has no image.
pub const PLACEHOLDER_IMAGE: &str = "assets/placeholder_image.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ref", rename_all = "lowercase")]
pub enum ImageSource {
    /// Opaque URI, passed through untouched.
    Remote(String),
    Placeholder(String),
}

impl ImageSource {
    pub fn resolve(uri: Option<&str>, placeholder: &str) -> Self {
        match uri {
            Some(uri) if !uri.is_empty() => ImageSource::Remote(uri.to_string()),
            _ => ImageSource::Placeholder(placeholder.to_string()),
        }
    }

    pub fn reference(&self) -> &str {
        match self {
            ImageSource::Remote(r) | ImageSource::Placeholder(r) => r,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSource::Placeholder(_))
    }
}
