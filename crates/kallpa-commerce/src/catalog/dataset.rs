//! The static product catalog.
//!
//! The sample dataset is embedded at build time and parsed once per
//! session; nothing is fetched at runtime.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// Embedded sample dataset.
const SAMPLE_DATASET: &str = include_str!("../../data/products.json");

/// Number of products shown in featured slots.
pub const FEATURED_COUNT: usize = 4;

/// An immutable, validated product list.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    materials: Vec<String>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// Categories are derived from the products in order of first appearance.
    /// Returns an error if ids repeat, prices mix currencies, a price is not
    /// positive, or a sustainability score exceeds 100.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        let currency = products.first().map(|p| p.price.currency);
        for product in &products {
            if Some(product.price.currency) != currency {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} is priced in {}, catalog in {}",
                    product.id,
                    product.price.currency,
                    currency.unwrap_or_default()
                )));
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if !product.price.is_positive() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} has non-positive price {}",
                    product.id, product.price
                )));
            }
            if product.sustainability > 100 {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} has sustainability {}%",
                    product.id, product.sustainability
                )));
            }
        }

        let mut categories: Vec<Category> = Vec::new();
        for product in &products {
            let category = Category::new(product.category.clone());
            if !categories.iter().any(|c| c.slug == category.slug) {
                categories.push(category);
            }
        }

        Ok(Self {
            products,
            categories,
            materials: Vec::new(),
        })
    }

    /// Set the materials offered as catalog filters.
    pub fn with_materials(mut self, materials: Vec<String>) -> Self {
        self.materials = materials;
        self
    }

    /// Parse a catalog from the JSON dataset format, pricing it in `currency`.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let dataset: DatasetRecord = serde_json::from_str(json)?;
        let products = dataset
            .products
            .into_iter()
            .map(|record| record.into_product(currency))
            .collect::<Result<Vec<_>, _>>()?;

        let mut catalog = Self::new(products)?.with_materials(dataset.materials);
        if !dataset.categories.is_empty() {
            catalog.categories = dataset.categories.into_iter().map(Category::new).collect();
        }
        tracing::debug!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load the embedded six-product sample dataset, priced in USD.
    pub fn sample() -> Result<Self, CommerceError> {
        Self::sample_in(Currency::USD)
    }

    /// Load the embedded sample dataset, priced in `currency`.
    pub fn sample_in(currency: Currency) -> Result<Self, CommerceError> {
        Self::from_json(SAMPLE_DATASET, currency)
    }

    /// All products, in dataset order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn get(&self, id: &str) -> Result<&Product, CommerceError> {
        self.find(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Currency every price is in; `None` for an empty catalog.
    pub fn currency(&self) -> Option<Currency> {
        self.products.first().map(|p| p.price.currency)
    }

    /// Products for the featured slots on the home page.
    pub fn featured(&self) -> &[Product] {
        &self.products[..self.products.len().min(FEATURED_COUNT)]
    }

    /// Browsable categories, starting with the "all" pseudo-category.
    pub fn categories(&self) -> Vec<Category> {
        std::iter::once(Category::all())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    /// Materials offered as catalog filters.
    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct DatasetRecord {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    materials: Vec<String>,
    products: Vec<ProductRecord>,
}

/// Product as written in the dataset, with a decimal price.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: String,
    name: String,
    price: f64,
    image: String,
    #[serde(default)]
    images: Option<BTreeMap<String, String>>,
    category: String,
    description: String,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    materials: Vec<String>,
    #[serde(default)]
    sizes: Vec<String>,
    #[serde(default)]
    colors: Vec<String>,
    sustainability: u32,
}

impl ProductRecord {
    fn into_product(self, currency: Currency) -> Result<Product, CommerceError> {
        let sustainability = u8::try_from(self.sustainability)
            .ok()
            .filter(|s| *s <= 100)
            .ok_or_else(|| {
                CommerceError::InvalidCatalog(format!(
                    "product {} has sustainability {}%",
                    self.id, self.sustainability
                ))
            })?;

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            price: Money::from_decimal(self.price, currency),
            image: self.image,
            images: self.images,
            category: self.category,
            description: self.description,
            features: self.features,
            materials: self.materials,
            sizes: self.sizes,
            colors: self.colors,
            sustainability,
        })
    }
}
