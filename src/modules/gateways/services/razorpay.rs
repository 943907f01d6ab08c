use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::gateway_trait::{GatewayConfig, InvoiceDetails, PaymentGateway, PaymentOutcome};
use crate::core::{AppError, Result};

pub const RAZORPAY_BASE_URL: &str = "https://api.razorpay.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Order id handed out when no real order could be obtained
pub const FALLBACK_ORDER_ID: &str = "razorpay_dummy_order_id";
pub const RAZORPAY_REFUND_ID: &str = "razorpay_refund_id";
pub const RAZORPAY_INVOICE_ID: &str = "razorpay_invoice_id";

const UPSTREAM_FAILURE_MESSAGE: &str =
    "This is a dummy Razorpay response due to error or test mode.";
const UNPARSEABLE_ORDER_MESSAGE: &str = "Could not parse Razorpay order ID. Returning dummy.";
const ORDER_CREATED_MESSAGE: &str = "Razorpay order created successfully.";

/// Razorpay Orders API client
///
/// API Documentation: https://razorpay.com/docs/api/orders/
pub struct RazorpayClient {
    client: Client,
    key_id: String,
    key_secret: String,
    base_url: String,
    timeout: Duration,
}

impl RazorpayClient {
    /// Create a new client bound to one key/secret pair
    ///
    /// # Arguments
    /// * `key_id` - Razorpay key id (from RAZORPAY_KEY_ID env var)
    /// * `key_secret` - Razorpay key secret (from RAZORPAY_KEY_SECRET env var)
    /// * `base_url` - API base URL (defaults to the live Razorpay API)
    /// * `timeout` - Upper bound for a single upstream call
    pub fn new(
        key_id: String,
        key_secret: String,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::new(),
            key_id,
            key_secret,
            base_url: base_url.unwrap_or_else(|| RAZORPAY_BASE_URL.to_string()),
            timeout,
        }
    }

    /// Create an order, returning the raw upstream JSON body
    pub async fn create_order(&self, amount: i64, currency: &str, receipt: &str) -> Result<Value> {
        let url = format!("{}/v1/orders", self.base_url.trim_end_matches('/'));

        let order_request = json!({
            "amount": amount,
            "currency": currency,
            "receipt": receipt,
        });

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .json(&order_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::upstream(format!(
                        "Razorpay gateway unavailable: {} ({})",
                        if e.is_timeout() {
                            "timeout"
                        } else {
                            "connection failed"
                        },
                        e
                    ))
                } else {
                    AppError::upstream(format!("Razorpay API request failed: {}", e))
                }
            })?;

        let status_code = response.status();
        let response_body = response
            .text()
            .await
            .map_err(|e| AppError::upstream(format!("Failed to read Razorpay response: {}", e)))?;

        if !status_code.is_success() {
            return Err(AppError::upstream(format!(
                "Razorpay API error - HTTP {} ({})",
                status_code.as_u16(),
                response_body
            )));
        }

        serde_json::from_str(&response_body)
            .map_err(|e| AppError::upstream(format!("Failed to parse Razorpay response: {}", e)))
    }
}

/// Live-network gateway backed by the Razorpay Orders API
#[derive(Default)]
pub struct RazorpayGateway {
    client: Option<RazorpayClient>,
}

impl RazorpayGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.client.is_some()
    }

    fn client(&self) -> Result<&RazorpayClient> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::configuration("Razorpay gateway used before init"))
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn init(&mut self, config: &GatewayConfig) -> Result<()> {
        let (Some(key), Some(secret)) = (config.get("key"), config.get("secret")) else {
            return Err(AppError::configuration(
                "missing Razorpay key or secret in config",
            ));
        };

        let timeout_ms = match config.get("timeout_ms") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::configuration(format!("invalid Razorpay timeout_ms: {}", raw))
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        self.client = Some(RazorpayClient::new(
            key.clone(),
            secret.clone(),
            config.get("base_url").cloned(),
            Duration::from_millis(timeout_ms),
        ));
        Ok(())
    }

    async fn create_payment(
        &self,
        amount: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOutcome> {
        let client = self.client()?;

        let body = match client.create_order(amount, currency, receipt).await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    receipt = %receipt,
                    error = %e,
                    "Razorpay order creation failed, returning placeholder order"
                );
                return Ok(PaymentOutcome::Degraded {
                    order_id: FALLBACK_ORDER_ID.to_string(),
                    message: UPSTREAM_FAILURE_MESSAGE.to_string(),
                    error: Some(e.to_string()),
                });
            }
        };

        match body.get("id").and_then(Value::as_str) {
            Some(order_id) => {
                info!(receipt = %receipt, order_id = %order_id, "Razorpay order created");
                Ok(PaymentOutcome::Proceed {
                    order_id: order_id.to_string(),
                    message: ORDER_CREATED_MESSAGE.to_string(),
                })
            }
            None => {
                warn!(receipt = %receipt, "Razorpay order response has no usable id");
                Ok(PaymentOutcome::Degraded {
                    order_id: FALLBACK_ORDER_ID.to_string(),
                    message: UNPARSEABLE_ORDER_MESSAGE.to_string(),
                    error: None,
                })
            }
        }
    }

    /// Signature verification is not implemented: every payment is accepted.
    ///
    /// Razorpay signs `order_id|payment_id` with the key secret, but the
    /// request carries no order id, so there is nothing to check against yet.
    async fn verify_payment(&self, payment_id: &str, _signature: &str) -> Result<bool> {
        warn!(
            payment_id = %payment_id,
            "Razorpay signature verification not implemented, accepting unverified"
        );
        Ok(true)
    }

    async fn refund(&self, _payment_id: &str, _amount: i64) -> Result<String> {
        Ok(RAZORPAY_REFUND_ID.to_string())
    }

    async fn generate_invoice(
        &self,
        _payment_id: &str,
        _details: &InvoiceDetails,
    ) -> Result<String> {
        Ok(RAZORPAY_INVOICE_ID.to_string())
    }

    fn name(&self) -> &str {
        "razorpay"
    }
}
