//! The cart store: owner of the session's cart state.

use crate::cart::{CartAction, CartState};
use crate::money::Currency;

/// Single source of truth for the cart, read by the navbar badge, the cart
/// drawer and the checkout summary.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    pub fn new(currency: Currency) -> Self {
        Self {
            state: CartState::new(currency),
        }
    }

    /// Apply an action. Never fails; unmatched keys leave the state as is.
    pub fn dispatch(&mut self, action: CartAction) {
        self.state.apply(&action);
        tracing::debug!(
            action = action.name(),
            lines = self.state.items().len(),
            items = self.state.item_count(),
            total = %self.state.total(),
            "cart updated"
        );
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineKey;
    use crate::catalog::Catalog;

    #[test]
    fn test_dispatch_sequence() {
        let catalog = Catalog::sample().unwrap();
        let mut store = CartStore::new(Currency::USD);

        store.dispatch(CartAction::add(catalog.find("1").unwrap().clone(), "M", "Charcoal"));
        store.dispatch(CartAction::add(catalog.find("1").unwrap().clone(), "M", "Charcoal"));
        store.dispatch(CartAction::ToggleCart);

        assert_eq!(store.state().items().len(), 1);
        assert_eq!(store.state().total().amount_cents, 2 * 48500);
        assert!(store.state().is_open());

        if let Some(action) = CartAction::remove_by_str("1-M-Charcoal") {
            store.dispatch(action);
        }
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_malformed_string_key_never_dispatches() {
        assert!(CartAction::remove_by_str("1-M-Deep-Purple").is_none());
        assert_eq!(
            CartAction::remove_by_str("2-S-Cream"),
            Some(CartAction::RemoveItem(LineKey::new("2", "S", "Cream")))
        );
    }
}
