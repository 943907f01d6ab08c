use async_trait::async_trait;

use super::gateway_trait::{GatewayConfig, InvoiceDetails, PaymentGateway, PaymentOutcome};
use crate::core::Result;

pub const DUMMY_PAYMENT_ID: &str = "dummy_payment_id";
pub const DUMMY_REFUND_ID: &str = "dummy_refund_id";
pub const DUMMY_INVOICE_ID: &str = "dummy_invoice_id";

/// No-op gateway: every operation succeeds with a canned identifier
///
/// Selected whenever no known provider is named.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyGateway;

impl DummyGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for DummyGateway {
    async fn init(&mut self, _config: &GatewayConfig) -> Result<()> {
        Ok(())
    }

    async fn create_payment(
        &self,
        _amount: i64,
        _currency: &str,
        _receipt: &str,
    ) -> Result<PaymentOutcome> {
        Ok(PaymentOutcome::Created {
            payment_id: DUMMY_PAYMENT_ID.to_string(),
        })
    }

    async fn verify_payment(&self, _payment_id: &str, _signature: &str) -> Result<bool> {
        Ok(true)
    }

    async fn refund(&self, _payment_id: &str, _amount: i64) -> Result<String> {
        Ok(DUMMY_REFUND_ID.to_string())
    }

    async fn generate_invoice(
        &self,
        _payment_id: &str,
        _details: &InvoiceDetails,
    ) -> Result<String> {
        Ok(DUMMY_INVOICE_ID.to_string())
    }

    fn name(&self) -> &str {
        "dummy"
    }
}
