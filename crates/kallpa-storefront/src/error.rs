//! Storefront error types.

use kallpa_commerce::CommerceError;
use thiserror::Error;

/// Errors surfaced to the storefront UI.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorefrontError {
    /// Domain error from the commerce layer.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The account area needs a logged-in session.
    #[error("Not logged in")]
    Unauthenticated,

    /// Size or color not chosen before adding to the cart.
    #[error("Please select {0}")]
    SelectionIncomplete(String),

    /// The chosen size or color is not offered for the product.
    #[error("Option not available for this product: {0}")]
    UnavailableOption(String),

    /// Invalid storefront configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<anyhow::Error> for StorefrontError {
    fn from(e: anyhow::Error) -> Self {
        StorefrontError::Config(format!("{:#}", e))
    }
}
