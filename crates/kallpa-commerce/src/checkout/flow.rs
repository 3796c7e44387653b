//! Checkout wizard state machine.
//!
//! Shipping → Payment → Review → Complete. Moving forward requires the
//! current step's form to be filled in; moving back is always allowed until
//! the order is complete. Leaving Review goes through order placement, which
//! holds the wizard in a processing sub-state until the gateway answers.

use crate::cart::{CartPricing, CartState, PricingPolicy};
use crate::checkout::{Order, OrderConfirmation, OrderStatus, PaymentInfo, ShippingInfo};
use crate::ids::OrderId;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Contact and shipping address.
    #[default]
    Shipping,
    /// Payment method and card details.
    Payment,
    /// Order review before submission.
    Review,
    /// Order placed.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
            CheckoutStep::Complete => "Complete",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
            CheckoutStep::Complete => 4,
        }
    }
}

/// Checkout wizard state for one session.
///
/// The form structs are public so the UI can bind inputs to them directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutWizard {
    step: CheckoutStep,
    /// Shipping form.
    pub shipping: ShippingInfo,
    /// Payment form.
    pub payment: PaymentInfo,
    processing: bool,
    confirmation: Option<OrderConfirmation>,
}

impl CheckoutWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Check whether a step's form is filled in.
    pub fn validate_step(&self, step: CheckoutStep) -> bool {
        self.missing_for_step(step).is_empty()
    }

    /// Whether "continue" is enabled on the current step.
    pub fn can_continue(&self) -> bool {
        !self.processing && self.validate_step(self.step)
    }

    /// Get what's missing to leave a step.
    pub fn missing_for_step(&self, step: CheckoutStep) -> Vec<&'static str> {
        match step {
            CheckoutStep::Shipping => self.shipping.missing_fields(),
            CheckoutStep::Payment => self.payment.missing_fields(),
            CheckoutStep::Review | CheckoutStep::Complete => Vec::new(),
        }
    }

    /// Advance from Shipping or Payment.
    ///
    /// Review is left by placing the order, not by advancing.
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        let next = match self.step {
            CheckoutStep::Shipping => CheckoutStep::Payment,
            CheckoutStep::Payment => CheckoutStep::Review,
            CheckoutStep::Review | CheckoutStep::Complete => {
                return Err(self.invalid_transition(self.next_label()));
            }
        };

        let missing = self.missing_for_step(self.step);
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }

        tracing::debug!(from = self.step.as_str(), to = next.as_str(), "checkout advanced");
        self.step = next;
        Ok(next)
    }

    /// Go back one step. Going back from Shipping stays on Shipping.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = match self.step {
            _ if self.processing => return Err(self.invalid_transition("previous step")),
            CheckoutStep::Shipping | CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Review => CheckoutStep::Payment,
            CheckoutStep::Complete => return Err(self.invalid_transition("previous step")),
        };

        self.step = prev;
        Ok(prev)
    }

    /// Snapshot the cart into an order and enter the processing sub-state.
    pub fn begin_placement(
        &mut self,
        cart: &CartState,
        policy: &PricingPolicy,
    ) -> Result<Order, CommerceError> {
        if self.step != CheckoutStep::Review || self.processing {
            return Err(self.invalid_transition("processing"));
        }
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let order = Order {
            id: OrderId::generate(),
            status: OrderStatus::Pending,
            lines: cart.items().to_vec(),
            pricing: CartPricing::calculate(cart, policy)?,
            shipping: self.shipping.clone(),
            payment_method: self.payment.method,
        };

        self.processing = true;
        tracing::debug!(order_id = %order.id, "order placement started");
        Ok(order)
    }

    /// Finish placement successfully.
    pub fn complete(&mut self, confirmation: OrderConfirmation) -> Result<(), CommerceError> {
        if !self.processing {
            return Err(self.invalid_transition("complete"));
        }
        self.processing = false;
        self.step = CheckoutStep::Complete;
        self.confirmation = Some(confirmation);
        Ok(())
    }

    /// Leave the processing sub-state without completing; back on Review.
    pub fn abort_placement(&mut self) {
        self.processing = false;
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Complete
    }

    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() as f64 / 4.0) * 100.0) as u8
    }

    fn next_label(&self) -> &'static str {
        match self.step {
            CheckoutStep::Review => "complete",
            _ => "none",
        }
    }

    fn invalid_transition(&self, to: &str) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            to: to.to_string(),
        }
    }
}
