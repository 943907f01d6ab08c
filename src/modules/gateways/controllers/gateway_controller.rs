use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::gateways::services::list_gateways as registered_gateways;

/// List all available payment gateways
/// GET /gateways
/// Returns provider names, whether each is live, and which one is the default
pub async fn list_gateways() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(registered_gateways()))
}

/// Configure gateway routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/gateways").route("", web::get().to(list_gateways)));
}
