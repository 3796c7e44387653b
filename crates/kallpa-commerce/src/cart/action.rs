//! Cart actions.

use crate::cart::LineKey;
use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// The mutation entry points of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartAction {
    /// Add one unit of a product in a size and color.
    AddItem {
        product: Product,
        size: String,
        color: String,
    },
    /// Remove a line entirely.
    RemoveItem(LineKey),
    /// Set a line's quantity; zero or negative removes the line.
    UpdateQuantity { key: LineKey, quantity: i64 },
    /// Flip drawer visibility.
    ToggleCart,
    /// Hide the drawer.
    CloseCart,
    /// Remove every line.
    Clear,
}

impl CartAction {
    pub fn add(product: Product, size: impl Into<String>, color: impl Into<String>) -> Self {
        CartAction::AddItem {
            product,
            size: size.into(),
            color: color.into(),
        }
    }

    pub fn update_quantity(key: LineKey, quantity: i64) -> Self {
        CartAction::UpdateQuantity { key, quantity }
    }

    /// Build a removal from a string key; malformed keys yield `None`.
    pub fn remove_by_str(key: &str) -> Option<Self> {
        LineKey::parse(key).map(CartAction::RemoveItem)
    }

    /// Short action name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddItem { .. } => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::ToggleCart => "toggle_cart",
            CartAction::CloseCart => "close_cart",
            CartAction::Clear => "clear",
        }
    }
}
