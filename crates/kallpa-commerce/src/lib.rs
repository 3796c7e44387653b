//! Storefront domain logic for KALLPA.
//!
//! This crate holds everything the storefront UI computes, independent of
//! how it is rendered:
//!
//! - **Catalog**: the static product dataset and its categories
//! - **Cart**: a reducer-style store with a derived total
//! - **Search**: the catalog filter pipeline and the quick-search overlay
//! - **Checkout**: the three-step wizard and order snapshots
//!
//! # Example
//!
//! ```rust
//! use kallpa_commerce::prelude::*;
//!
//! let catalog = Catalog::sample().unwrap();
//! let mut cart = CartStore::new(Currency::USD);
//!
//! let shell = catalog.find("1").unwrap().clone();
//! cart.dispatch(CartAction::add(shell.clone(), "M", "Charcoal"));
//! cart.dispatch(CartAction::add(shell, "M", "Charcoal"));
//! assert_eq!(cart.state().total().display(), "$970.00");
//!
//! let jackets = filter_products(
//!     catalog.products(),
//!     &FilterCriteria::new().with_category("jackets"),
//! );
//! assert_eq!(jackets.len(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{
        CartAction, CartLine, CartPricing, CartState, CartStore, LineKey, PricingPolicy,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutStep, CheckoutWizard, Order, OrderConfirmation, OrderStatus, PaymentInfo,
        PaymentMethod, ShippingInfo,
    };

    // Search
    pub use crate::search::{
        filter_products, Filter, FilterCriteria, OverlayKey, OverlayOutcome, PageLink, PriceRange,
        SearchHit, SearchOverlay, SortKey,
    };
}
