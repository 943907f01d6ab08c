use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::payments::PaymentService;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub application: bool,
    /// Whether the live provider has a key/secret pair to init with
    pub razorpay_credentials: bool,
}

/// GET /health - Liveness probe
/// Returns 200 if the application is alive (can respond to requests)
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: env!("CARGO_PKG_NAME").to_string(),
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// The dummy provider always serves, so missing live credentials are
/// reported but do not make the service unready.
pub async fn readiness_check(service: web::Data<Arc<PaymentService>>) -> impl Responder {
    let checks = ReadinessChecks {
        application: true,
        razorpay_credentials: service.credentials().is_configured(),
    };

    if !checks.razorpay_credentials {
        tracing::warn!("Razorpay credentials not configured; live provider requests will fail");
    }

    HttpResponse::Ok().json(ReadinessResponse {
        ready: checks.application,
        checks,
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
