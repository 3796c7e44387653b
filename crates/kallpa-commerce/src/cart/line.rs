//! Cart lines and their composite identity.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a cart line: one product in one size and one color.
///
/// Lines are looked up by structural equality. The `id-size-color` string
/// form exists only for display and for callers that still hold string keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: String,
    pub color: String,
}

impl LineKey {
    /// Separator used by the string form.
    pub const SEPARATOR: char = '-';

    pub fn new(
        product_id: impl Into<ProductId>,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.into(),
            color: color.into(),
        }
    }

    /// Parse the `id-size-color` string form.
    ///
    /// Returns `None` unless the string splits into exactly three non-empty
    /// parts, so a component that itself contains the separator can never be
    /// mistaken for a different line.
    ///
    /// ```
    /// use kallpa_commerce::cart::LineKey;
    /// assert!(LineKey::parse("1-M-Charcoal").is_some());
    /// assert!(LineKey::parse("1-M-Off-White").is_none());
    /// ```
    pub fn parse(key: &str) -> Option<Self> {
        let mut parts = key.split(Self::SEPARATOR);
        let id = parts.next().filter(|p| !p.is_empty())?;
        let size = parts.next().filter(|p| !p.is_empty())?;
        let color = parts.next().filter(|p| !p.is_empty())?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(id, size, color))
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.product_id,
            self.size,
            self.color,
            sep = Self::SEPARATOR
        )
    }
}

/// A product in the cart with its chosen variant and quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product when it was added.
    pub product: Product,
    /// Always at least 1 while the line is in a cart.
    pub quantity: u32,
    pub selected_size: String,
    pub selected_color: String,
}

impl CartLine {
    pub(crate) fn new(product: Product, size: String, color: String) -> Self {
        Self {
            product,
            quantity: 1,
            selected_size: size,
            selected_color: color,
        }
    }

    /// The line's composite identity.
    pub fn key(&self) -> LineKey {
        LineKey::new(
            self.product.id.clone(),
            self.selected_size.clone(),
            self.selected_color.clone(),
        )
    }

    /// Check identity without allocating a key.
    pub fn matches(&self, key: &LineKey) -> bool {
        self.product.id == key.product_id
            && self.selected_size == key.size
            && self.selected_color == key.color
    }

    /// Unit price times quantity, saturating on overflow.
    pub fn line_total(&self) -> Money {
        let price = self.product.price;
        price
            .try_multiply(i64::from(self.quantity))
            .unwrap_or_else(|| Money::new(i64::MAX, price.currency))
    }

    /// Image for the selected color.
    pub fn image(&self) -> &str {
        self.product.image_for_color(&self.selected_color)
    }
}
