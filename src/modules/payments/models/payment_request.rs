use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use serde::Deserialize;

use crate::modules::gateways::InvoiceDetails;

/// Provider selector taken from the query string
///
/// Extraction never fails: repeated keys resolve to the first `provider`
/// value and an unparsable query string counts as no selector.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProviderQuery {
    pub provider: Option<String>,
}

impl ProviderQuery {
    pub fn from_query_string(query: &str) -> Self {
        let provider = web::Query::<Vec<(String, String)>>::from_query(query)
            .ok()
            .and_then(|pairs| {
                pairs
                    .into_inner()
                    .into_iter()
                    .find(|(key, _)| key == "provider")
                    .map(|(_, value)| value)
            });

        Self { provider }
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }
}

impl FromRequest for ProviderQuery {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_query_string(req.query_string())))
    }
}

/// POST /pay body
///
/// Missing fields default to zero/empty; the dummy gateway accepts anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreatePaymentRequest {
    /// Amount in the smallest currency unit
    pub amount: i64,
    /// Three-letter currency code, passed through as-is
    pub currency: String,
    /// Caller-supplied receipt reference
    pub receipt: String,
}

/// POST /verify body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VerifyPaymentRequest {
    pub payment_id: String,
    pub signature: String,
}

/// POST /refund body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RefundRequest {
    pub payment_id: String,
    pub amount: i64,
}

/// POST /invoice body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerateInvoiceRequest {
    pub payment_id: String,
    pub details: InvoiceDetails,
}
