//! Payment processing façade
//!
//! Accepts payment creation and verification calls over HTTP and dispatches
//! them to a per-request payment gateway chosen by provider name.

use std::sync::Arc;

use actix_web::web;

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::gateways;
pub use modules::payments;

use config::ProviderCredentials;
use payments::PaymentService;

/// Shared application data: the payment service built from startup credentials
pub fn app_data(credentials: ProviderCredentials) -> web::Data<Arc<PaymentService>> {
    web::Data::new(Arc::new(PaymentService::new(credentials)))
}

/// Register every route of the service
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.configure(modules::health::configure)
        .configure(modules::gateways::configure)
        .configure(modules::payments::configure);
}
