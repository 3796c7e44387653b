//! Product type.

use crate::catalog::category::slugify;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product in the static catalog.
///
/// Products are loaded once and never mutated; cart lines hold their own copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Default display image.
    pub image: String,
    /// Per-color images, keyed by color name.
    pub images: Option<BTreeMap<String, String>>,
    /// Category display name (e.g., "Base layers").
    pub category: String,
    pub description: String,
    /// Feature bullets, in display order.
    pub features: Vec<String>,
    /// Material composition lines (e.g., "60% Alpaca fiber").
    pub materials: Vec<String>,
    /// Size labels, in display order.
    pub sizes: Vec<String>,
    /// Color names, in display order.
    pub colors: Vec<String>,
    /// Sustainability score as a percentage (0-100).
    pub sustainability: u8,
}

impl Product {
    /// Image to show for a color, falling back to the default image.
    pub fn image_for_color(&self, color: &str) -> &str {
        self.images
            .as_ref()
            .and_then(|images| images.get(color))
            .map(String::as_str)
            .unwrap_or(&self.image)
    }

    /// Slug form of the category (e.g., "base-layers").
    pub fn category_slug(&self) -> String {
        slugify(&self.category)
    }

    /// Check whether a size label is offered.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check whether a color is offered.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Case-insensitive substring match over name, description and features.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .features
                .iter()
                .any(|feature| feature.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn shell() -> Product {
        let mut images = BTreeMap::new();
        images.insert("Olive".to_string(), "/images/shell-olive.png".to_string());
        Product {
            id: ProductId::new("1"),
            name: "Andean Storm Shell".to_string(),
            price: Money::new(48500, Currency::USD),
            image: "/images/shell-charcoal.png".to_string(),
            images: Some(images),
            category: "Jackets".to_string(),
            description: "Technical shell".to_string(),
            features: vec!["3-layer waterproof".to_string()],
            materials: vec!["60% Alpaca fiber".to_string()],
            sizes: vec!["M".to_string()],
            colors: vec!["Olive".to_string(), "Charcoal".to_string()],
            sustainability: 95,
        }
    }

    #[test]
    fn test_image_for_color_falls_back() {
        let product = shell();
        assert_eq!(product.image_for_color("Olive"), "/images/shell-olive.png");
        assert_eq!(product.image_for_color("Charcoal"), "/images/shell-charcoal.png");
    }

    #[test]
    fn test_matches_text_checks_features() {
        let product = shell();
        assert!(product.matches_text("waterproof"));
        assert!(product.matches_text("storm"));
        assert!(!product.matches_text("gloves"));
    }

    #[test]
    fn test_variant_lookup() {
        let product = shell();
        assert!(product.has_size("M"));
        assert!(!product.has_size("XS"));
        assert!(product.has_color("Charcoal"));
    }
}
