use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::models::ApiResponse;
use crate::services::predict::PredictionService;

/// GET /api/v1/health
pub async fn health_check(service: web::Data<PredictionService>) -> Result<HttpResponse> {
    let response = ApiResponse::success(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "symbols": service.table().len(),
    }));
    Ok(HttpResponse::Ok().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
