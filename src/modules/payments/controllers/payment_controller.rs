use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::de::DeserializeOwned;

use crate::core::error::{AppError, Result};
use crate::modules::payments::models::{
    CreatePaymentRequest, CreatePaymentResponse, Envelope, GenerateInvoiceRequest,
    InvoiceResponse, ProviderQuery, RefundRequest, RefundResponse, VerifyPaymentRequest,
    VerifyPaymentResponse,
};
use crate::modules::payments::services::PaymentService;

/// Create a payment
/// POST /pay?provider={name}
/// Body: {amount, currency, receipt}
pub async fn create_payment(
    service: web::Data<Arc<PaymentService>>,
    query: ProviderQuery,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let gateway = match service.gateway_for(query.provider()).await {
        Ok(gateway) => gateway,
        Err(e) => return Ok(respond::<CreatePaymentResponse>(Err(e))),
    };

    let request: CreatePaymentRequest = decode_body(&body)?;
    let result = service.create_payment(gateway.as_ref(), &request).await;

    Ok(respond(result.map(CreatePaymentResponse::from)))
}

/// Verify a payment signature
/// POST /verify?provider={name}
/// Body: {payment_id, signature}
pub async fn verify_payment(
    service: web::Data<Arc<PaymentService>>,
    query: ProviderQuery,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let gateway = match service.gateway_for(query.provider()).await {
        Ok(gateway) => gateway,
        Err(e) => return Ok(respond::<VerifyPaymentResponse>(Err(e))),
    };

    let request: VerifyPaymentRequest = decode_body(&body)?;
    let result = service.verify_payment(gateway.as_ref(), &request).await;

    Ok(respond(result.map(VerifyPaymentResponse::from)))
}

/// Refund a payment
/// POST /refund?provider={name}
/// Body: {payment_id, amount}
pub async fn refund_payment(
    service: web::Data<Arc<PaymentService>>,
    query: ProviderQuery,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let gateway = match service.gateway_for(query.provider()).await {
        Ok(gateway) => gateway,
        Err(e) => return Ok(respond::<RefundResponse>(Err(e))),
    };

    let request: RefundRequest = decode_body(&body)?;
    let result = service.refund(gateway.as_ref(), &request).await;

    Ok(respond(result.map(|refund_id| RefundResponse {
        refund_id,
        error: None,
    })))
}

/// Generate an invoice for a payment
/// POST /invoice?provider={name}
/// Body: {payment_id, details}
pub async fn generate_invoice(
    service: web::Data<Arc<PaymentService>>,
    query: ProviderQuery,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let gateway = match service.gateway_for(query.provider()).await {
        Ok(gateway) => gateway,
        Err(e) => return Ok(respond::<InvoiceResponse>(Err(e))),
    };

    let request: GenerateInvoiceRequest = decode_body(&body)?;
    let result = service.generate_invoice(gateway.as_ref(), &request).await;

    Ok(respond(result.map(|invoice_id| InvoiceResponse {
        invoice_id,
        error: None,
    })))
}

/// Decode the first JSON value of a body regardless of the declared content type
///
/// Data after that value is ignored and a `null` body yields the default request.
fn decode_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<T>>()
        .next()
    {
        Some(Ok(request)) => Ok(request.unwrap_or_default()),
        Some(Err(e)) => Err(AppError::decode(e.to_string())),
        None => Err(AppError::decode("empty request body")),
    }
}

/// Render an envelope: 200 on success, 500 with `error` set otherwise
fn respond<E: Envelope>(result: Result<E>) -> HttpResponse {
    match result {
        Ok(envelope) => HttpResponse::Ok().json(envelope),
        Err(e) => HttpResponse::InternalServerError().json(E::failed(e.to_string())),
    }
}

/// Configure payment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/pay", web::post().to(create_payment))
        .route("/verify", web::post().to(verify_payment))
        .route("/refund", web::post().to(refund_payment))
        .route("/invoice", web::post().to(generate_invoice));
}
