//! Fetch collaborator contract and the sources shipped with the app.

use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use shelfscan_catalog::{Product, decode_export};

use crate::error::FetchError;

/// Delivers the complete product list on every call.
///
/// Calls may overlap (focus events and pull-to-refresh are not coordinated), so
/// implementations must be `Send + Sync`. Ordering of overlapping responses is handled
/// by [`crate::InventoryStore`], not here.
pub trait InventorySource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Product>, FetchError>;
}

impl<S> InventorySource for std::sync::Arc<S>
where
    S: InventorySource + ?Sized,
{
    fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        (**self).fetch()
    }
}

/// Reads an exported inventory document from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventorySource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        let json = std::fs::read_to_string(&self.path)?;
        let decoded = decode_export(&json)?;

        if !decoded.rejected.is_empty() {
            tracing::warn!(
                path = %self.path.display(),
                rejected = decoded.rejected.len(),
                "inventory export contained undecodable records"
            );
        }

        Ok(decoded.products)
    }
}

/// In-memory source for tests/dev; the list can be swapped between fetches.
#[derive(Debug, Default)]
pub struct StaticSource {
    products: RwLock<Vec<Product>>,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn set(&self, products: Vec<Product>) {
        if let Ok(mut guard) = self.products.write() {
            *guard = products;
        }
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl InventorySource for StaticSource {
    fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.products
            .read()
            .map(|products| products.clone())
            .map_err(|_| FetchError::Unavailable("static source poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfscan_catalog::ProductFields;
    use shelfscan_core::ProductId;

    fn temp_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("shelfscan-{}.json", uuid::Uuid::now_v7()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn json_file_source_decodes_export() {
        let path = temp_file(
            r#"{"records": [
                {"id": "rec1", "fields": {"Product Name": "Widget"}},
                {"id": "rec2", "fields": {}}
            ]}"#,
        );

        let products = JsonFileSource::new(&path).fetch().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name(), "Widget");

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        match source.fetch() {
            Err(FetchError::Io(_)) => {}
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_file_is_decode_error() {
        let path = temp_file("not json");
        match JsonFileSource::new(&path).fetch() {
            Err(FetchError::Decode(_)) => {}
            other => panic!("Expected Decode error, got {other:?}"),
        }
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn static_source_counts_and_swaps() {
        let source = StaticSource::new(Vec::new());
        assert!(source.fetch().unwrap().is_empty());

        source.set(vec![Product::new(
            ProductId::new("rec1").unwrap(),
            ProductFields::named("Widget"),
        )]);
        assert_eq!(source.fetch().unwrap().len(), 1);
        assert_eq!(source.fetch_count(), 2);
    }
}
