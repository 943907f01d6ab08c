use serde::Serialize;

use crate::modules::gateways::{OrderSummary, PaymentOutcome};

/// Response body shared by every payment endpoint
///
/// The primary result field is always present; `error` is set only when the
/// gateway could not be initialized or the operation failed.
pub trait Envelope: Serialize + Default {
    fn set_error(&mut self, error: String);

    fn failed(error: String) -> Self {
        let mut envelope = Self::default();
        envelope.set_error(error);
        envelope
    }
}

/// POST /pay response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatePaymentResponse {
    pub payment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<PaymentOutcome> for CreatePaymentResponse {
    fn from(outcome: PaymentOutcome) -> Self {
        Self {
            payment_id: outcome.payment_id().to_string(),
            order: outcome.order_summary(),
            error: None,
        }
    }
}

/// POST /verify response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyPaymentResponse {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<bool> for VerifyPaymentResponse {
    fn from(verified: bool) -> Self {
        Self {
            verified,
            error: None,
        }
    }
}

/// POST /refund response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefundResponse {
    pub refund_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /invoice response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceResponse {
    pub invoice_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

macro_rules! impl_envelope {
    ($($envelope:ty),+ $(,)?) => {
        $(
            impl Envelope for $envelope {
                fn set_error(&mut self, error: String) {
                    self.error = Some(error);
                }
            }
        )+
    };
}

impl_envelope!(
    CreatePaymentResponse,
    VerifyPaymentResponse,
    RefundResponse,
    InvoiceResponse,
);
