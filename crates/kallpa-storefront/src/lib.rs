//! # KALLPA Storefront
//!
//! Session state for the KALLPA storefront, built on `kallpa-commerce`:
//! one [`Storefront`] per browsing session holding the cart, the catalog
//! filters, the search overlay, the checkout wizard and the login session.
//!
//! ## Example
//!
//! ```rust
//! use kallpa_storefront::{ProductSelection, Storefront, StorefrontConfig};
//!
//! let mut store = Storefront::from_config(&StorefrontConfig::default()).unwrap();
//! let selection = ProductSelection::new().with_size("M").with_color("Olive");
//! store.add_selection("4", &selection).unwrap();
//!
//! let pricing = store.pricing().unwrap();
//! assert_eq!(pricing.grand_total.display(), "$361.30");
//! ```

pub mod account;
pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod pages;
pub mod storefront;

pub use account::Account;
pub use auth::{AuthSession, Authenticator, Credentials, MockAuthenticator, UserProfile};
pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use gateway::{OrderGateway, SimulatedGateway};
pub use pages::{ProductPage, ProductSelection};
pub use storefront::Storefront;
