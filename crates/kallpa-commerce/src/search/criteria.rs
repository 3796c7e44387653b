//! Catalog filter criteria and sort keys.

use crate::catalog::{Category, Product};
use crate::money::Money;
use crate::search::Filter;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for the catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Name A-Z.
    #[default]
    Name,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Most sustainable first.
    Sustainability,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Sustainability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Sustainability => "sustainability",
        }
    }

    /// Parse a sort key; unknown values fall back to name order.
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "sustainability" => SortKey::Sustainability,
            _ => SortKey::Name,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Sustainability => "Most Sustainable",
        }
    }

    /// Order two products under this key.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            SortKey::PriceLow => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortKey::PriceHigh => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortKey::Sustainability => b.sustainability.cmp(&a.sustainability),
        }
    }
}

/// Inclusive price bounds in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min_cents: i64,
    pub max_cents: i64,
}

impl PriceRange {
    /// Build a range from major-unit bounds (e.g., dollars), as the price
    /// slider reports them.
    pub fn from_major(min: f64, max: f64) -> Self {
        Self {
            min_cents: (min * 100.0).round() as i64,
            max_cents: (max * 100.0).round() as i64,
        }
    }

    pub fn contains(&self, price: &Money) -> bool {
        self.min_cents <= price.amount_cents && price.amount_cents <= self.max_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::from_major(0.0, 500.0)
    }
}

/// Ephemeral filter state of the catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected category slug, or "all".
    pub category: String,
    pub price_range: PriceRange,
    /// Selected materials, in selection order.
    pub materials: Vec<String>,
    /// Free-text query as typed.
    pub query: String,
    pub sort: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: Category::ALL.to_string(),
            price_range: PriceRange::default(),
            materials: Vec::new(),
            query: String::new(),
            sort: SortKey::default(),
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category = slug.into();
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        let material = material.into();
        if !self.materials.contains(&material) {
            self.materials.push(material);
        }
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Select a material if unselected, otherwise deselect it.
    pub fn toggle_material(&mut self, material: &str) {
        if let Some(pos) = self.materials.iter().position(|m| m == material) {
            self.materials.remove(pos);
        } else {
            self.materials.push(material.to_string());
        }
    }

    /// The active filters, in pipeline order.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(4);
        if !self.category.eq_ignore_ascii_case(Category::ALL) {
            filters.push(Filter::Category(self.category.to_lowercase()));
        }
        filters.push(Filter::Price(self.price_range));
        if !self.materials.is_empty() {
            filters.push(Filter::Materials(
                self.materials.iter().map(|m| m.to_lowercase()).collect(),
            ));
        }
        let query = self.query.trim();
        if !query.is_empty() {
            filters.push(Filter::Text(query.to_lowercase()));
        }
        filters
    }
}
