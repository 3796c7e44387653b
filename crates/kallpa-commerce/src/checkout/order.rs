//! Order snapshots and confirmations.

use crate::cart::{CartLine, CartPricing};
use crate::checkout::{PaymentMethod, ShippingInfo};
use crate::ids::OrderId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Submitted, awaiting the gateway.
    #[default]
    Pending,
    /// Accepted by the gateway.
    Confirmed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
        }
    }
}

/// What the customer is buying, frozen when the order is placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub lines: Vec<CartLine>,
    pub pricing: CartPricing,
    pub shipping: ShippingInfo,
    /// Only the method is kept; card details never leave the payment form.
    pub payment_method: PaymentMethod,
}

impl Order {
    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn grand_total(&self) -> Money {
        self.pricing.grand_total
    }

    /// Mark the order confirmed.
    pub fn confirm(&mut self) {
        self.status = OrderStatus::Confirmed;
    }
}

/// Receipt returned once an order is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Confirm an order as of now.
    pub fn for_order(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            total: order.grand_total(),
            placed_at: Utc::now(),
        }
    }
}
