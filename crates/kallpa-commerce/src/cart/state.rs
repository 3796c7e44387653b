//! Cart state and its reducer.

use crate::cart::{CartAction, CartLine, LineKey};
use crate::money::{Currency, Money};
use serde::Serialize;

/// Cart contents plus drawer visibility.
///
/// `total` is derived from the lines and recomputed after every mutation;
/// there is no way to set it directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartState {
    items: Vec<CartLine>,
    is_open: bool,
    total: Money,
}

impl CartState {
    /// Empty, closed cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            is_open: false,
            total: Money::zero(currency),
        }
    }

    /// Apply an action, returning the next state and leaving `self` untouched.
    pub fn reduce(&self, action: &CartAction) -> CartState {
        let mut next = self.clone();
        next.apply(action);
        next
    }

    /// Apply an action in place.
    pub fn apply(&mut self, action: &CartAction) {
        match action {
            CartAction::AddItem {
                product,
                size,
                color,
            } => {
                if product.price.currency != self.currency() {
                    tracing::warn!(
                        product_id = %product.id,
                        price_currency = %product.price.currency,
                        cart_currency = %self.currency(),
                        "ignoring product priced in another currency"
                    );
                    return;
                }
                let existing = self.items.iter_mut().find(|line| {
                    line.product.id == product.id
                        && &line.selected_size == size
                        && &line.selected_color == color
                });
                match existing {
                    Some(line) => line.quantity = line.quantity.saturating_add(1),
                    None => self
                        .items
                        .push(CartLine::new(product.clone(), size.clone(), color.clone())),
                }
                self.recompute_total();
            }
            CartAction::RemoveItem(key) => {
                self.items.retain(|line| !line.matches(key));
                self.recompute_total();
            }
            CartAction::UpdateQuantity { key, quantity } => {
                let quantity = u32::try_from((*quantity).max(0)).unwrap_or(u32::MAX);
                if let Some(line) = self.items.iter_mut().find(|line| line.matches(key)) {
                    line.quantity = quantity;
                }
                self.items.retain(|line| line.quantity > 0);
                self.recompute_total();
            }
            CartAction::ToggleCart => self.is_open = !self.is_open,
            CartAction::CloseCart => self.is_open = false,
            CartAction::Clear => {
                self.items.clear();
                self.recompute_total();
            }
        }
    }

    /// Lines always share the cart currency, so only overflow can fail the
    /// sum; it saturates.
    fn recompute_total(&mut self) {
        let currency = self.currency();
        self.total = Money::try_sum(self.items.iter().map(CartLine::line_total), currency)
            .unwrap_or_else(|| Money::new(i64::MAX, currency));
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn currency(&self) -> Currency {
        self.total.currency
    }

    /// Total units across all lines, as shown on the navbar badge.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a line by its composite key.
    pub fn find(&self, key: &LineKey) -> Option<&CartLine> {
        self.items.iter().find(|line| line.matches(key))
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
