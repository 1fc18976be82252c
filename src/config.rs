//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置，并允许环境变量覆盖部分字段

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 配置文件查找顺序
const CONFIG_PATHS: [&str; 2] = ["config.json", "config/config.json"];

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// 预测配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// 每次预测生成的模拟历史天数
    #[serde(default = "default_history_days")]
    pub history_days: usize,
    /// 历史K线接口允许的最大天数
    #[serde(default = "default_max_history_days")]
    pub max_history_days: usize,
    /// 预测天数上限
    #[serde(default = "default_max_horizon")]
    pub max_horizon: usize,
    /// 随机种子（为空则每次请求使用系统熵）
    #[serde(default)]
    pub seed: Option<u64>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// 预测配置
    #[serde(default)]
    pub prediction: PredictionConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 配置来源，日志系统初始化后再输出
#[derive(Debug)]
pub enum ConfigSource {
    /// 从文件加载
    File(&'static str),
    /// 文件存在但解析失败，已回退默认值
    Fallback(&'static str, String),
    /// 未找到配置文件
    Default,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_history_days() -> usize { 100 }
fn default_max_history_days() -> usize { 1000 }
fn default_max_horizon() -> usize { 365 }
fn default_log_level() -> String { "info".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            history_days: default_history_days(),
            max_history_days: default_max_history_days(),
            max_horizon: default_max_horizon(),
            seed: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 从 JSON 字符串解析配置
    pub fn from_json(content: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值
    ///
    /// 此时日志尚未初始化，加载结果通过 [`ConfigSource`] 返回
    pub fn load() -> (Self, ConfigSource) {
        for path in CONFIG_PATHS {
            if Path::new(path).exists() {
                return match Self::from_file(path) {
                    Ok(config) => (config, ConfigSource::File(path)),
                    Err(e) => (Self::default(), ConfigSource::Fallback(path, e.to_string())),
                };
            }
        }

        (Self::default(), ConfigSource::Default)
    }

    /// 应用环境变量覆盖
    ///
    /// - PREDICTOR_HOST: 监听地址
    /// - PREDICTOR_PORT: 监听端口
    /// - PREDICTOR_SEED: 随机种子
    pub fn apply_env_overrides(&mut self) {
        if let Some(host) = env_var("PREDICTOR_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_var("PREDICTOR_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(seed) = env_var("PREDICTOR_SEED").and_then(|v| v.parse().ok()) {
            self.prediction.seed = Some(seed);
        }
    }

    /// 校验配置合法性
    pub fn validate(&self) -> Result<()> {
        let p = &self.prediction;
        if p.history_days == 0 {
            bail!("prediction.history_days 必须大于 0");
        }
        if p.max_horizon == 0 {
            bail!("prediction.max_horizon 必须大于 0");
        }
        if p.history_days > p.max_history_days {
            bail!(
                "prediction.history_days ({}) 不能超过 max_history_days ({})",
                p.history_days,
                p.max_history_days
            );
        }
        Ok(())
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.prediction.history_days, 100);
        assert_eq!(config.prediction.max_horizon, 365);
        assert!(config.prediction.seed.is_none());
        assert_eq!(config.log.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AppConfig::from_json(r#"{"server": {"port": 9000}, "prediction": {"seed": 7}}"#)
            .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.prediction.seed, Some(7));
        assert_eq!(config.prediction.history_days, 100);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.prediction.history_days = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.prediction.max_horizon = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.prediction.history_days = 2000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_json() {
        assert!(AppConfig::from_json("{not json").is_err());
    }
}
