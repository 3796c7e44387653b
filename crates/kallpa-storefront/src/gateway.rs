//! Order submission.
//!
//! Nothing is charged or persisted. `SimulatedGateway` waits for the
//! configured processing delay and confirms the order.

use std::time::Duration;

use async_trait::async_trait;
use kallpa_commerce::checkout::{Order, OrderConfirmation};
use kallpa_commerce::CommerceError;

use crate::config::CheckoutConfig;

/// Accepts placed orders.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, order: &Order) -> Result<OrderConfirmation, CommerceError>;
}

/// Gateway that confirms every order after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    failure: Option<String>,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// Gateway with the configured processing delay.
    pub fn from_config(config: &CheckoutConfig) -> Self {
        Self::new(config.processing_delay())
    }

    /// A gateway that rejects every order with `reason` after the delay.
    pub fn failing(delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            delay,
            failure: Some(reason.into()),
        }
    }
}

#[async_trait]
impl OrderGateway for SimulatedGateway {
    async fn submit(&self, order: &Order) -> Result<OrderConfirmation, CommerceError> {
        tracing::debug!(order_id = %order.id, delay_ms = self.delay.as_millis() as u64, "processing order");
        tokio::time::sleep(self.delay).await;

        match &self.failure {
            Some(reason) => Err(CommerceError::OrderFailed(reason.clone())),
            None => Ok(OrderConfirmation::for_order(order)),
        }
    }
}
