//! 股票预测演示服务
//!
//! 基于模拟行情（趋势 + 噪声 + 季节项）运行四个预测公式，
//! 以 RESTful API 形式返回预测结果

mod config;     // 配置加载
mod error;      // 错误类型
mod handlers;   // HTTP 请求处理器
mod middleware; // 中间件
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::config::{AppConfig, ConfigSource};
use crate::middleware::Cors;
use crate::services::market::SymbolTable;
use crate::services::predict::PredictionService;

/// 应用程序入口
///
/// 启动 HTTP 服务器，默认监听 0.0.0.0:8080
#[actix_web::main]
async fn main() -> io::Result<()> {
    let (mut config, source) = AppConfig::load();
    config.apply_env_overrides();

    // 初始化日志系统，RUST_LOG 优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    match source {
        ConfigSource::File(path) => log::info!("从 {} 加载配置成功", path),
        ConfigSource::Fallback(path, e) => log::warn!("加载配置文件 {} 失败: {}，使用默认配置", path, e),
        ConfigSource::Default => log::info!("使用默认配置"),
    }

    config
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    if config.prediction.seed.is_some() {
        log::warn!("已设置随机种子，所有预测结果将可复现");
    }

    // 股票参数表只构建一次，所有 worker 共享
    let table = Arc::new(SymbolTable::builtin());
    let service = web::Data::new(PredictionService::new(table, config.prediction.clone()));

    let bind_addr = config.bind_addr();
    log::info!("启动股票预测服务，监听 {}", bind_addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .wrap(Cors)               // 跨域
            .app_data(service.clone())
            .configure(handlers::config)  // 配置路由
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr)?.run().await
}
