//! 股票接口处理器
//!
//! - GET /stocks - 内置股票参数列表
//! - GET /stocks/{symbol} - 单只股票参数（未知代码返回默认参数）
//! - GET /stocks/{symbol}/history?days=100 - 模拟日K线

use actix_web::{web, HttpResponse, ResponseError, Result};

use crate::models::{ApiResponse, HistoryQuery, SymbolProfile};
use crate::services::predict::PredictionService;

pub async fn list_stocks(service: web::Data<PredictionService>) -> Result<HttpResponse> {
    let profiles: Vec<SymbolProfile> = service.table().profiles().into_iter().cloned().collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(profiles)))
}

pub async fn get_stock_profile(
    path: web::Path<String>,
    service: web::Data<PredictionService>,
) -> Result<HttpResponse> {
    let symbol = path.into_inner();
    Ok(HttpResponse::Ok().json(ApiResponse::success(service.profile(&symbol))))
}

pub async fn get_stock_history(
    path: web::Path<String>,
    query: web::Query<HistoryQuery>,
    service: web::Data<PredictionService>,
) -> Result<HttpResponse> {
    let symbol = path.into_inner();

    match service.history(&symbol, query.days) {
        Ok(bars) => Ok(HttpResponse::Ok().json(ApiResponse::success(bars))),
        Err(e) => {
            log::warn!("生成 {} 历史K线失败: {}", symbol, e);
            Ok(e.error_response())
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stocks")
            .route("", web::get().to(list_stocks))
            .route("/{symbol}", web::get().to(get_stock_profile))
            .route("/{symbol}/history", web::get().to(get_stock_history))
    );
}
