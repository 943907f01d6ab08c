use tracing::{debug, error, info};

use crate::config::ProviderCredentials;
use crate::core::Result;
use crate::modules::gateways::{PaymentGateway, PaymentOutcome, ProviderKind};
use crate::modules::payments::models::{
    CreatePaymentRequest, GenerateInvoiceRequest, RefundRequest, VerifyPaymentRequest,
};

/// Provider used when the caller names none
pub const DEFAULT_PROVIDER: &str = "dummy";

/// Resolves a gateway per request and runs payment operations against it
///
/// Holds only the startup credentials; gateways are built, initialized and
/// dropped within a single request.
pub struct PaymentService {
    credentials: ProviderCredentials,
}

impl PaymentService {
    pub fn new(credentials: ProviderCredentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &ProviderCredentials {
        &self.credentials
    }

    /// Build and initialize a gateway for the requested provider
    ///
    /// Unknown providers fall back to the dummy gateway. Initialization
    /// failures are returned, never swallowed.
    pub async fn gateway_for(&self, provider: Option<&str>) -> Result<Box<dyn PaymentGateway>> {
        let name = provider
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PROVIDER);
        let kind = ProviderKind::from_name(name);

        let mut gateway = kind.new_gateway();
        let config = self.credentials.gateway_config(kind);

        if let Err(e) = gateway.init(&config).await {
            error!(
                provider = %name,
                gateway = %kind,
                error = %e,
                "Gateway initialization failed"
            );
            return Err(e);
        }

        debug!(provider = %name, gateway = %kind, "Gateway resolved");
        Ok(gateway)
    }

    pub async fn create_payment(
        &self,
        gateway: &dyn PaymentGateway,
        request: &CreatePaymentRequest,
    ) -> Result<PaymentOutcome> {
        info!(
            gateway = %gateway.name(),
            receipt = %request.receipt,
            amount = request.amount,
            currency = %request.currency,
            "Creating payment with gateway"
        );

        let result = gateway
            .create_payment(request.amount, &request.currency, &request.receipt)
            .await;
        match &result {
            Ok(outcome) => info!(
                gateway = %gateway.name(),
                payment_id = %outcome.payment_id(),
                payment_proceed = outcome.payment_proceed(),
                "Payment created"
            ),
            Err(e) => error!(gateway = %gateway.name(), error = %e, "Failed to create payment"),
        }
        result
    }

    pub async fn verify_payment(
        &self,
        gateway: &dyn PaymentGateway,
        request: &VerifyPaymentRequest,
    ) -> Result<bool> {
        let result = gateway
            .verify_payment(&request.payment_id, &request.signature)
            .await;
        match &result {
            Ok(verified) => info!(
                gateway = %gateway.name(),
                payment_id = %request.payment_id,
                verified = *verified,
                "Payment verification finished"
            ),
            Err(e) => error!(
                gateway = %gateway.name(),
                payment_id = %request.payment_id,
                error = %e,
                "Failed to verify payment"
            ),
        }
        result
    }

    pub async fn refund(
        &self,
        gateway: &dyn PaymentGateway,
        request: &RefundRequest,
    ) -> Result<String> {
        info!(
            gateway = %gateway.name(),
            payment_id = %request.payment_id,
            amount = request.amount,
            "Refunding payment"
        );

        let result = gateway.refund(&request.payment_id, request.amount).await;
        if let Err(e) = &result {
            error!(gateway = %gateway.name(), error = %e, "Failed to refund payment");
        }
        result
    }

    pub async fn generate_invoice(
        &self,
        gateway: &dyn PaymentGateway,
        request: &GenerateInvoiceRequest,
    ) -> Result<String> {
        info!(
            gateway = %gateway.name(),
            payment_id = %request.payment_id,
            "Generating invoice"
        );

        let result = gateway
            .generate_invoice(&request.payment_id, &request.details)
            .await;
        if let Err(e) = &result {
            error!(gateway = %gateway.name(), error = %e, "Failed to generate invoice");
        }
        result
    }
}
