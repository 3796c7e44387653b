//! Checkout summary pricing.

use crate::cart::CartState;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Shipping and tax rules applied on top of the cart total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Flat shipping charge per order, in major currency units.
    pub shipping_flat: f64,
    /// Sales tax (IGV) as a percentage of the subtotal.
    pub tax_percent: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            shipping_flat: 25.0,
            tax_percent: 18.0,
        }
    }
}

/// Pricing breakdown shown in the checkout summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// The cart total.
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    /// subtotal + shipping + tax
    pub grand_total: Money,
}

impl CartPricing {
    /// Price a cart under a policy.
    pub fn calculate(cart: &CartState, policy: &PricingPolicy) -> Result<Self, CommerceError> {
        let subtotal = cart.total();
        let shipping = Money::from_decimal(policy.shipping_flat, subtotal.currency);
        let tax = subtotal.percentage(policy.tax_percent);
        let grand_total = subtotal
            .try_add(&shipping)
            .and_then(|m| m.try_add(&tax))
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            subtotal,
            shipping,
            tax,
            grand_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartAction;
    use crate::catalog::Catalog;

    #[test]
    fn test_checkout_summary() {
        let catalog = Catalog::sample().unwrap();
        let cart = CartState::default().reduce(&CartAction::add(
            catalog.find("1").unwrap().clone(),
            "M",
            "Olive",
        ));

        let pricing = CartPricing::calculate(&cart, &PricingPolicy::default()).unwrap();
        assert_eq!(pricing.subtotal.amount_cents, 48500);
        assert_eq!(pricing.shipping.amount_cents, 2500);
        assert_eq!(pricing.tax.amount_cents, 8730);
        assert_eq!(pricing.grand_total.display(), "$597.30");
    }

    #[test]
    fn test_custom_policy() {
        let catalog = Catalog::sample().unwrap();
        let cart = CartState::default().reduce(&CartAction::add(
            catalog.find("6").unwrap().clone(),
            "S",
            "Cream",
        ));
        let policy = PricingPolicy {
            shipping_flat: 0.0,
            tax_percent: 0.0,
        };

        let pricing = CartPricing::calculate(&cart, &policy).unwrap();
        assert_eq!(pricing.grand_total, pricing.subtotal);
    }
}
