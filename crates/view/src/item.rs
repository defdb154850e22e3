//! Per-item view model.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use shelfscan_catalog::Product;
use shelfscan_core::{Entity, ProductId};

use crate::config::ViewConfig;
use crate::date_label::posted_label;
use crate::freshness::is_posted_new;
use crate::image::ImageSource;
use crate::label::{display_name_with, is_longer_than};
use crate::layout::{WidthBucket, width_bucket};
use crate::row::{ExpandIcon, ItemRow};
use crate::tags::parse_tags;

/// One rendered product plus its expand/collapse flag.
///
/// Derived values are recomputed on every call; only `expanded` is state, and it is
/// owned by this item alone. A freshly built item is always collapsed.
#[derive(Debug, Clone)]
pub struct ProductItemViewModel {
    product: Product,
    config: Arc<ViewConfig>,
    expanded: bool,
}

impl ProductItemViewModel {
    pub fn new(product: Product, config: Arc<ViewConfig>) -> Self {
        Self {
            product,
            config,
            expanded: false,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> &ProductId {
        self.product.id()
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between collapsed and expanded; returns the new state.
    pub fn toggle_expansion(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn is_new(&self, now: DateTime<Utc>) -> bool {
        is_posted_new(self.product.posted(), now, self.config.freshness_window_ms)
    }

    pub fn is_long_name(&self) -> bool {
        is_longer_than(self.product.name(), self.config.long_name_after)
    }

    /// Label for the current expansion state.
    pub fn display_name(&self) -> String {
        self.display_name_for(self.expanded)
    }

    pub fn display_name_for(&self, expanded: bool) -> String {
        display_name_with(
            self.product.name(),
            expanded,
            self.config.truncate_after,
            &self.config.ellipsis,
        )
    }

    pub fn width_bucket(&self, now: DateTime<Utc>) -> WidthBucket {
        width_bucket(self.is_new(now), self.is_long_name())
    }

    pub fn tags(&self) -> Vec<String> {
        parse_tags(self.product.categories())
    }

    /// Tags drawn in the expanded section; none while collapsed.
    pub fn visible_tags(&self) -> Vec<String> {
        if self.expanded {
            self.tags()
        } else {
            Vec::new()
        }
    }

    pub fn expand_icon(&self) -> ExpandIcon {
        ExpandIcon::for_state(self.expanded)
    }

    pub fn posted_label(&self) -> String {
        posted_label(self.product.posted())
    }

    pub fn image(&self) -> ImageSource {
        ImageSource::resolve(self.product.image(), &self.config.placeholder_image)
    }

    /// Snapshot of every derived value for a single render pass.
    pub fn render(&self, now: DateTime<Utc>) -> ItemRow {
        let is_new = self.is_new(now);
        let is_long_name = self.is_long_name();
        let bucket = width_bucket(is_new, is_long_name);

        ItemRow {
            id: self.product_id().clone(),
            display_name: self.display_name(),
            is_new,
            is_long_name,
            width_bucket: bucket,
            width_px: bucket.px(&self.config),
            tags: self.tags(),
            visible_tags: self.visible_tags(),
            expanded: self.expanded,
            expand_icon: self.expand_icon(),
            posted_label: self.posted_label(),
            image: self.image(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use shelfscan_catalog::{PostedAt, ProductFields};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn item(fields: ProductFields) -> ProductItemViewModel {
        let product = Product::new(ProductId::new("rec1").unwrap(), fields);
        ProductItemViewModel::new(product, Arc::new(ViewConfig::default()))
    }

    #[test]
    fn starts_collapsed() {
        let vm = item(ProductFields::named("Milk"));
        assert!(!vm.expanded());
        assert_eq!(vm.expand_icon(), ExpandIcon::ChevronDown);
    }

    #[test]
    fn toggle_flips_state() {
        let mut vm = item(ProductFields::named("Milk"));
        assert!(vm.toggle_expansion());
        assert_eq!(vm.expand_icon(), ExpandIcon::ChevronUp);
        assert!(!vm.toggle_expansion());
        assert!(!vm.expanded());
    }

    #[test]
    fn fresh_nine_char_name_scenario() {
        let vm = item(ProductFields::named("Chocolate").with_posted(now()));
        let row = vm.render(now());

        assert!(row.is_new);
        assert!(!row.is_long_name);
        assert_eq!(row.width_bucket, WidthBucket::Normal);
        assert_eq!(row.width_px, 160);
        assert_eq!(row.display_name, "Chocolat...");
    }

    #[test]
    fn fresh_long_name_is_narrow() {
        let vm = item(ProductFields::named("Sparkling Water").with_posted(now() - Duration::days(1)));
        assert_eq!(vm.width_bucket(now()), WidthBucket::Narrow);
        assert_eq!(vm.render(now()).width_px, 130);
    }

    #[test]
    fn stale_long_name_is_normal() {
        let vm = item(ProductFields::named("Sparkling Water").with_posted(now() - Duration::days(8)));
        assert!(!vm.is_new(now()));
        assert_eq!(vm.width_bucket(now()), WidthBucket::Normal);
    }

    #[test]
    fn unparseable_posting_is_not_new() {
        let vm = item(
            ProductFields::named("Sparkling Water")
                .with_posted(PostedAt::Unparseable("n/a".to_string())),
        );
        let row = vm.render(now());
        assert!(!row.is_new);
        assert_eq!(row.posted_label, "Invalid Date");
        assert_eq!(row.width_bucket, WidthBucket::Normal);
    }

    #[test]
    fn expanding_shows_full_name_and_tags() {
        let mut vm = item(ProductFields::named("Sparkling Water").with_categories("Drinks , Fizzy"));
        assert_eq!(vm.display_name(), "Sparklin...");
        assert!(vm.visible_tags().is_empty());
        assert_eq!(vm.tags(), vec!["Drinks", "Fizzy"]);

        vm.toggle_expansion();
        let row = vm.render(now());
        assert_eq!(row.display_name, "Sparkling Water");
        assert_eq!(row.visible_tags, vec!["Drinks", "Fizzy"]);
        assert!(row.expanded);
    }

    #[test]
    fn display_name_for_ignores_state() {
        let vm = item(ProductFields::named("Sparkling Water"));
        assert_eq!(vm.display_name_for(true), "Sparkling Water");
        assert_eq!(vm.display_name_for(false), "Sparklin...");
    }

    #[test]
    fn image_falls_back_to_placeholder() {
        let vm = item(ProductFields::named("Milk"));
        assert!(vm.image().is_placeholder());

        let vm = item(ProductFields::named("Milk").with_image("https://img.example/m.png"));
        assert_eq!(vm.image().reference(), "https://img.example/m.png");
    }

    #[test]
    fn render_is_repeatable() {
        let vm = item(ProductFields::named("Sparkling Water").with_posted(now()));
        assert_eq!(vm.render(now()), vm.render(now()));
    }

    #[test]
    fn thresholds_follow_config() {
        let config = ViewConfig {
            truncate_after: 3,
            long_name_after: 3,
            ellipsis: "…".to_string(),
            ..ViewConfig::default()
        };
        let product = Product::new(
            ProductId::new("rec1").unwrap(),
            ProductFields::named("Milk").with_posted(now()),
        );
        let vm = ProductItemViewModel::new(product, Arc::new(config));
        assert_eq!(vm.display_name(), "Mil…");
        assert_eq!(vm.width_bucket(now()), WidthBucket::Narrow);
    }
}
