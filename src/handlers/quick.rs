//! 独立预测接口
//!
//! POST /api/predict
//!
//! 请求体: {"symbol": "AAPL", "days": 3, "modelType": "ensemble"}
//! 响应体: {"symbol", "predictions", "confidence", "model", "timestamp"}
//! 错误体: {"error": "..."}

use actix_web::{error, web, HttpRequest, HttpResponse, ResponseError, Result};

use crate::models::{ErrorBody, PredictionRequest};
use crate::services::predict::PredictionService;
use super::prediction::log_rejection;

pub async fn quick_predict(
    body: web::Json<PredictionRequest>,
    service: web::Data<PredictionService>,
) -> Result<HttpResponse> {
    match service.quick(&body) {
        Ok(prediction) => Ok(HttpResponse::Ok().json(prediction)),
        Err(e) => {
            log_rejection("predict", &e);
            Ok(HttpResponse::build(e.status_code()).json(ErrorBody::new(e.public_message())))
        }
    }
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorBody::new("Method not allowed"))
}

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()));
    error::InternalError::from_response(err, response).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/predict")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .route(web::post().to(quick_predict))
            .default_service(web::to(method_not_allowed)),
    );
}
