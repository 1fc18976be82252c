//! 预测数据模型
//!
//! 定义预测请求、预测结果以及独立预测接口的响应结构

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PredictError;

/// 模型类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// 趋势动量公式（LSTM 标签）
    Lstm,
    /// 季节自回归公式（ARIMA 标签）
    Arima,
    /// 线性回归公式
    Linear,
    /// 加权集成
    Ensemble,
}

impl ModelType {
    /// 全部模型，按展示顺序
    pub const ALL: [ModelType; 4] = [
        ModelType::Lstm,
        ModelType::Arima,
        ModelType::Linear,
        ModelType::Ensemble,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Lstm => "lstm",
            ModelType::Arima => "arima",
            ModelType::Linear => "linear",
            ModelType::Ensemble => "ensemble",
        }
    }

    /// 固定置信度，与输入数据无关
    pub fn confidence(&self) -> f64 {
        match self {
            ModelType::Lstm => 0.87,
            ModelType::Arima => 0.81,
            ModelType::Linear => 0.75,
            ModelType::Ensemble => 0.94,
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = PredictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lstm" => Ok(ModelType::Lstm),
            "arima" => Ok(ModelType::Arima),
            "linear" => Ok(ModelType::Linear),
            "ensemble" => Ok(ModelType::Ensemble),
            other => Err(PredictError::UnknownModel(other.to_string())),
        }
    }
}

/// 预测请求
///
/// 字段全部可选，缺失时由服务层返回校验错误
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    /// 股票代码
    pub symbol: Option<String>,
    /// 预测天数，接受整数、小数（截断）或数字字符串
    #[serde(default, deserialize_with = "lenient_days")]
    pub days: Option<i64>,
    /// 模型类型: lstm | arima | linear | ensemble
    pub model_type: Option<String>,
}

/// 预测天数的原始 JSON 形式
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDays {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawDays {
    fn into_days(self) -> Option<i64> {
        match self {
            RawDays::Int(days) => Some(days),
            RawDays::Float(days) => truncate_days(days),
            RawDays::Text(text) => {
                let text = text.trim();
                text.parse::<i64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(truncate_days))
            }
        }
    }
}

fn truncate_days(days: f64) -> Option<i64> {
    if days.is_finite() {
        Some(days.trunc() as i64)
    } else {
        None
    }
}

/// 无法解析为数字的 days 视为缺失
fn lenient_days<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDays>::deserialize(deserializer)?;
    Ok(raw.and_then(RawDays::into_days))
}

/// 通过校验的请求参数
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub symbol: String,
    /// 预测天数，负数按 0 处理
    pub days: usize,
    pub model_type: String,
}

impl PredictionRequest {
    /// 校验必填字段
    ///
    /// 空字符串和 0 天视为缺失
    pub fn validate(&self) -> Result<ValidatedRequest, PredictError> {
        let symbol = self.symbol.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let days = self.days.filter(|d| *d != 0);
        let model_type = self.model_type.as_deref().map(str::trim).filter(|s| !s.is_empty());

        match (symbol, days, model_type) {
            (Some(symbol), Some(days), Some(model_type)) => Ok(ValidatedRequest {
                symbol: symbol.to_string(),
                days: usize::try_from(days).unwrap_or(0),
                model_type: model_type.to_string(),
            }),
            _ => Err(PredictError::Validation(
                "Missing required parameters: symbol, days, modelType".to_string(),
            )),
        }
    }
}

/// 默认集成权重，偏重趋势动量公式
pub const DEFAULT_ENSEMBLE_WEIGHTS: EnsembleWeights = EnsembleWeights {
    lstm: 0.5,
    arima: 0.3,
    linear: 0.2,
};

/// 集成权重
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnsembleWeights {
    pub lstm: f64,
    pub arima: f64,
    pub linear: f64,
}

impl Default for EnsembleWeights {
    fn default() -> Self {
        DEFAULT_ENSEMBLE_WEIGHTS
    }
}

/// 集成模型的子模型结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleComponents {
    pub lstm: PredictionResult,
    pub arima: PredictionResult,
    pub linear: PredictionResult,
}

/// 单个模型的预测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// 未来每日预测价格，长度等于预测天数
    pub predictions: Vec<f64>,
    /// 固定置信度
    pub confidence: f64,
    /// 模型名称
    pub model: String,
    /// 使用的特征
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// 子模型结果（仅集成模型）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Box<EnsembleComponents>>,
    /// 子模型权重（仅集成模型）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<EnsembleWeights>,
}

/// 买卖建议
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Sell,
}

/// 预测摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    /// 当前参考价（基准价格）
    pub current_price: f64,
    /// 次日预测价
    pub next_day: f64,
    /// 目标价（最后一天预测价）
    pub target: f64,
    /// 目标价相对当前价的涨跌额
    pub change: f64,
    /// 涨跌幅（百分比）
    pub change_percent: f64,
    pub recommendation: Recommendation,
}

/// 完整预测流程的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    /// 股票代码（大写）
    pub symbol: String,
    /// 模型类型
    pub model_type: ModelType,
    /// 预测天数
    pub days: usize,
    /// 模型结果
    #[serde(flatten)]
    pub result: PredictionResult,
    /// 摘要（预测为空时无）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PredictionSummary>,
}

/// 独立预测接口响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickPrediction {
    /// 股票代码（大写）
    pub symbol: String,
    pub predictions: Vec<f64>,
    pub confidence: f64,
    /// 原样返回请求中的 modelType
    pub model: String,
    /// ISO 8601 时间戳
    pub timestamp: String,
}

/// 模型目录条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_type: ModelType,
    pub label: String,
    pub confidence: f64,
    pub features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_type_parse() {
        for model in ModelType::ALL {
            assert_eq!(model.as_str().parse::<ModelType>().unwrap(), model);
        }
        assert!(matches!(
            "transformer".parse::<ModelType>(),
            Err(PredictError::UnknownModel(_))
        ));
    }

    #[test]
    fn test_request_camel_case() {
        let req: PredictionRequest =
            serde_json::from_str(r#"{"symbol":"AAPL","days":3,"modelType":"ensemble"}"#).unwrap();
        let valid = req.validate().unwrap();
        assert_eq!(valid.symbol, "AAPL");
        assert_eq!(valid.days, 3);
        assert_eq!(valid.model_type, "ensemble");
    }

    #[test]
    fn test_request_missing_fields() {
        let cases = [
            r#"{"symbol":"AAPL","modelType":"lstm"}"#,
            r#"{"days":3,"modelType":"lstm"}"#,
            r#"{"symbol":"AAPL","days":3}"#,
            r#"{"symbol":"","days":3,"modelType":"lstm"}"#,
            r#"{"symbol":"AAPL","days":0,"modelType":"lstm"}"#,
        ];
        for body in cases {
            let req: PredictionRequest = serde_json::from_str(body).unwrap();
            assert!(
                matches!(req.validate(), Err(PredictError::Validation(_))),
                "应当校验失败: {}",
                body
            );
        }
    }

    #[test]
    fn test_days_accepts_float_and_numeric_string() {
        let cases = [
            (r#"{"symbol":"AAPL","days":3.0,"modelType":"lstm"}"#, 3),
            (r#"{"symbol":"AAPL","days":7.9,"modelType":"lstm"}"#, 7),
            (r#"{"symbol":"AAPL","days":"3","modelType":"lstm"}"#, 3),
            (r#"{"symbol":"AAPL","days":" 5.5 ","modelType":"lstm"}"#, 5),
        ];
        for (body, expected) in cases {
            let req: PredictionRequest = serde_json::from_str(body).unwrap();
            assert_eq!(req.validate().unwrap().days, expected, "{}", body);
        }
    }

    #[test]
    fn test_days_unparseable_is_missing() {
        for body in [
            r#"{"symbol":"AAPL","days":"abc","modelType":"lstm"}"#,
            r#"{"symbol":"AAPL","days":null,"modelType":"lstm"}"#,
        ] {
            let req: PredictionRequest = serde_json::from_str(body).unwrap();
            assert!(req.days.is_none());
            assert!(matches!(req.validate(), Err(PredictError::Validation(_))));
        }
    }

    #[test]
    fn test_negative_days_become_empty_horizon() {
        let req = PredictionRequest {
            symbol: Some("MSFT".into()),
            days: Some(-4),
            model_type: Some("linear".into()),
        };
        assert_eq!(req.validate().unwrap().days, 0);
    }

    #[test]
    fn test_result_serialization_skips_ensemble_fields() {
        let result = PredictionResult {
            predictions: vec![1.0, 2.0],
            confidence: 0.75,
            model: "Linear Regression".into(),
            features: vec!["Price Trend".into()],
            components: None,
            weights: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("components").is_none());
        assert!(json.get("weights").is_none());
        assert_eq!(json["model"], "Linear Regression");
    }
}
