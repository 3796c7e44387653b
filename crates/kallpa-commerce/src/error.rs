//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
///
/// The cart store itself never fails; these cover catalog loading,
/// checkout transitions and order placement.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The static dataset violates a catalog invariant.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A checkout step cannot be left until these fields are filled.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Orders cannot be placed for an empty cart.
    #[error("Cannot place an order for an empty cart")]
    EmptyCart,

    /// The order gateway rejected the order.
    #[error("Order failed: {0}")]
    OrderFailed(String),

    /// Order placement was cancelled before it finished.
    #[error("Order placement cancelled")]
    OrderCancelled,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
