//! Search module.
//!
//! The catalog filter pipeline and the quick-search overlay.

mod criteria;
mod filter;
mod overlay;
mod pipeline;

pub use criteria::{FilterCriteria, PriceRange, SortKey};
pub use filter::Filter;
pub use overlay::{OverlayKey, OverlayOutcome, PageLink, SearchHit, SearchOverlay};
pub use pipeline::filter_products;
