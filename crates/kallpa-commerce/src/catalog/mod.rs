//! Product catalog module.
//!
//! Contains the product and category types and the static catalog.

mod category;
mod dataset;
mod product;

pub use category::Category;
pub use dataset::{Catalog, FEATURED_COUNT};
pub use product::Product;
