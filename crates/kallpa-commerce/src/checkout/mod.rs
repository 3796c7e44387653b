//! Checkout module.
//!
//! Contains the checkout wizard, its forms, and order snapshots.

mod flow;
mod order;
mod payment;
mod shipping;

pub use flow::{CheckoutStep, CheckoutWizard};
pub use order::{Order, OrderConfirmation, OrderStatus};
pub use payment::{PaymentInfo, PaymentMethod};
pub use shipping::ShippingInfo;
