//! Category types for product organization.

use serde::{Deserialize, Serialize};

/// A browsable product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
}

impl Category {
    /// Slug that selects every product.
    pub const ALL: &'static str = "all";

    /// Create a category, deriving the slug from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self { name, slug }
    }

    /// The "All Products" pseudo-category.
    pub fn all() -> Self {
        Self {
            name: "All Products".to_string(),
            slug: Self::ALL.to_string(),
        }
    }

    /// Check if this is the "all" pseudo-category.
    pub fn is_all(&self) -> bool {
        self.slug == Self::ALL
    }
}

/// Lowercase a display name and join its words with hyphens.
pub(crate) fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
