//! Shopping cart module.
//!
//! A reducer-style store: `CartAction`s are the only way to change a
//! `CartState`, and the total is always derived from the lines.

mod action;
mod line;
mod pricing;
mod state;
mod store;

pub use action::CartAction;
pub use line::{CartLine, LineKey};
pub use pricing::{CartPricing, PricingPolicy};
pub use state::CartState;
pub use store::CartStore;
