//! The account area, visible only with a session.

use kallpa_commerce::checkout::Order;

use crate::auth::UserProfile;

/// Read-only view of the logged-in customer and their orders this session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Account<'a> {
    pub profile: &'a UserProfile,
    pub orders: &'a [Order],
}

impl<'a> Account<'a> {
    /// Orders, most recent first.
    pub fn recent_orders(&self) -> impl Iterator<Item = &'a Order> {
        self.orders.iter().rev()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
