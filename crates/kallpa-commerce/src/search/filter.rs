//! Catalog filter predicates.

use crate::catalog::Product;
use crate::search::PriceRange;
use serde::{Deserialize, Serialize};

/// One step of the catalog filter pipeline.
///
/// String payloads are stored lowercased; `FilterCriteria::filters` does the
/// normalisation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Category slug must match.
    Category(String),
    /// Price within inclusive bounds.
    Price(PriceRange),
    /// Any selected material appears within any product material (OR).
    Materials(Vec<String>),
    /// Substring of name, description or a feature.
    Text(String),
}

impl Filter {
    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(slug) => product.category_slug() == *slug,
            Filter::Price(range) => range.contains(&product.price),
            Filter::Materials(selected) => selected.iter().any(|wanted| {
                product
                    .materials
                    .iter()
                    .any(|material| material.to_lowercase().contains(wanted.as_str()))
            }),
            Filter::Text(needle) => product.matches_text(needle),
        }
    }
}
