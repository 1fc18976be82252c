pub mod health;
pub mod prediction;
pub mod quick;
pub mod stock;

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::models::ApiResponse;

/// /api/v1 下查询参数解析失败时返回统一格式
fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(err.to_string()));
    error::InternalError::from_response(err, response).into()
}

/// /api/v1 下请求体解析失败时返回统一格式
fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(err.to_string()));
    error::InternalError::from_response(err, response).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .configure(health::config)
            .configure(stock::config)
            .configure(prediction::config)
    )
    .configure(quick::config);
}
