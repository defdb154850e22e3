use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfscan_core::{Entity, ProductId};

use crate::posted::PostedAt;

/// Typed field set of a product record.
///
/// `name` is the deduplication key and is compared verbatim everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductFields {
    pub posted: PostedAt,
    pub code: String,
    pub name: String,
    /// Remote image URI; `None` when the record had no image or an empty one.
    pub image: Option<String>,
    /// Raw comma-separated category labels.
    pub categories: String,
}

impl ProductFields {
    /// Fields with only a name set; everything else empty.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_posted(mut self, posted: impl Into<PostedAt>) -> Self {
        self.posted = posted.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        self.image = (!image.is_empty()).then_some(image);
        self
    }

    pub fn with_categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = categories.into();
        self
    }
}

/// A fetched product record.
///
/// Records are read-only for the lifetime of a render cycle and replaced wholesale
/// on every refetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    /// Provenance only; never consulted by the view pipeline.
    created_time: Option<DateTime<Utc>>,
    fields: ProductFields,
}

impl Product {
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            created_time: None,
            fields,
        }
    }

    pub fn with_created_time(mut self, created_time: Option<DateTime<Utc>>) -> Self {
        self.created_time = created_time;
        self
    }

    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        self.created_time
    }

    pub fn fields(&self) -> &ProductFields {
        &self.fields
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn code(&self) -> &str {
        &self.fields.code
    }

    pub fn posted(&self) -> &PostedAt {
        &self.fields.posted
    }

    pub fn image(&self) -> Option<&str> {
        self.fields.image.as_deref()
    }

    pub fn categories(&self) -> &str {
        &self.fields.categories
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_product_id() -> ProductId {
        ProductId::new("rec001").unwrap()
    }

    #[test]
    fn accessors_expose_fields() {
        let posted = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let product = Product::new(
            test_product_id(),
            ProductFields::named("Oat Milk")
                .with_code("OM-1")
                .with_posted(posted)
                .with_image("https://cdn.example/oat.png")
                .with_categories("Dairy, Vegan"),
        );

        assert_eq!(product.id().as_str(), "rec001");
        assert_eq!(product.name(), "Oat Milk");
        assert_eq!(product.code(), "OM-1");
        assert_eq!(product.posted().instant(), Some(posted));
        assert_eq!(product.image(), Some("https://cdn.example/oat.png"));
        assert_eq!(product.categories(), "Dairy, Vegan");
        assert_eq!(product.created_time(), None);
    }

    #[test]
    fn empty_image_is_no_image() {
        let fields = ProductFields::named("Bread").with_image("");
        assert_eq!(fields.image, None);
    }

    #[test]
    fn records_compare_by_value() {
        let a = Product::new(test_product_id(), ProductFields::named("Bread"));
        let b = Product::new(test_product_id(), ProductFields::named("Bread"));
        assert_eq!(a, b);
    }
}
