//! 预测接口处理器
//!
//! - POST /predictions - 生成模拟序列并运行预测公式
//! - GET /models - 模型目录
//! - GET /market/status - 美股开闭市状态

use actix_web::{web, HttpResponse, ResponseError, Result};

use crate::error::PredictError;
use crate::models::{ApiResponse, PredictionRequest};
use crate::services::market::market_status_now;
use crate::services::predict::{model_catalog, PredictionService};

/// 按错误类型记录日志
pub(crate) fn log_rejection(context: &str, e: &PredictError) {
    match e {
        PredictError::Validation(_) | PredictError::UnknownModel(_) => {
            log::warn!("{} 请求被拒绝: {}", context, e)
        }
        PredictError::EmptySeries | PredictError::Internal(_) => {
            log::error!("{} 计算失败: {}", context, e)
        }
    }
}

/// POST /api/v1/predictions
///
/// 请求体: {"symbol": "AAPL", "days": 7, "modelType": "ensemble"}
pub async fn create_prediction(
    body: web::Json<PredictionRequest>,
    service: web::Data<PredictionService>,
) -> Result<HttpResponse> {
    match service.predict(&body) {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(report))),
        Err(e) => {
            log_rejection("predictions", &e);
            Ok(e.error_response())
        }
    }
}

pub async fn list_models() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(model_catalog())))
}

pub async fn get_market_status() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(market_status_now())))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/predictions", web::post().to(create_prediction))
        .route("/models", web::get().to(list_models))
        .route("/market/status", web::get().to(get_market_status));
}
