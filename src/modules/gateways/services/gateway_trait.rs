use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::Result;

/// Per-request gateway settings (`key`, `secret`, ...), never persisted
pub type GatewayConfig = HashMap<String, String>;

/// Free-form invoice details passed through to the provider
pub type InvoiceDetails = Map<String, Value>;

/// Payment gateway capability set every provider implements
///
/// A gateway is created fresh for each inbound call, initialized with that
/// call's [`GatewayConfig`], and discarded once the response is written.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Validate configuration and set up any client state
    ///
    /// Fails with `AppError::Configuration` when required keys are absent.
    async fn init(&mut self, config: &GatewayConfig) -> Result<()>;

    /// Create a payment (or upstream order)
    ///
    /// Upstream trouble is reported inside the returned [`PaymentOutcome`],
    /// not through the error channel.
    async fn create_payment(
        &self,
        amount: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOutcome>;

    /// Verify a payment signature
    async fn verify_payment(&self, payment_id: &str, signature: &str) -> Result<bool>;

    /// Refund a payment, returning the refund identifier
    async fn refund(&self, payment_id: &str, amount: i64) -> Result<String>;

    /// Generate an invoice for a payment, returning the invoice identifier
    async fn generate_invoice(&self, payment_id: &str, details: &InvoiceDetails)
        -> Result<String>;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// Result of a payment creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Provider returned a plain payment identifier
    Created { payment_id: String },

    /// Upstream order created; the caller may proceed to checkout
    Proceed { order_id: String, message: String },

    /// Upstream unavailable or unusable; a placeholder order is returned
    Degraded {
        order_id: String,
        message: String,
        error: Option<String>,
    },
}

impl PaymentOutcome {
    /// Identifier to hand back to the caller
    pub fn payment_id(&self) -> &str {
        match self {
            PaymentOutcome::Created { payment_id } => payment_id,
            PaymentOutcome::Proceed { order_id, .. } => order_id,
            PaymentOutcome::Degraded { order_id, .. } => order_id,
        }
    }

    pub fn payment_proceed(&self) -> bool {
        !matches!(self, PaymentOutcome::Degraded { .. })
    }

    /// Structured order view, for outcomes that carry one
    pub fn order_summary(&self) -> Option<OrderSummary> {
        match self {
            PaymentOutcome::Created { .. } => None,
            PaymentOutcome::Proceed { order_id, message } => Some(OrderSummary {
                order_id: order_id.clone(),
                message: message.clone(),
                payment_proceed: true,
                error: None,
            }),
            PaymentOutcome::Degraded {
                order_id,
                message,
                error,
            } => Some(OrderSummary {
                order_id: order_id.clone(),
                message: message.clone(),
                payment_proceed: false,
                error: error.clone(),
            }),
        }
    }
}

/// Order details rendered in the payment creation envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: String,
    pub message: String,
    pub payment_proceed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
