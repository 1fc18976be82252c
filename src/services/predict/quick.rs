//! 独立预测接口
//!
//! 不生成历史序列，直接由股票参数外推：
//! predicted[i] = base * (1 + trend * (i + 1) + noise)，noise ~ U(-0.5, 0.5) * volatility * 0.5

use rand::{Rng, RngCore};

use crate::models::{iso_timestamp, ModelType, QuickPrediction, ValidatedRequest};
use crate::services::market::SymbolTable;

/// 未知模型类型的置信度
pub const DEFAULT_CONFIDENCE: f64 = 0.80;

/// 按模型类型查置信度，未知类型返回默认值
pub fn confidence_for(model_type: &str) -> f64 {
    model_type
        .parse::<ModelType>()
        .map(|m| m.confidence())
        .unwrap_or(DEFAULT_CONFIDENCE)
}

pub fn quick_predict(
    table: &SymbolTable,
    request: &ValidatedRequest,
    rng: &mut dyn RngCore,
) -> QuickPrediction {
    let profile = table.resolve(&request.symbol);

    let predictions = (0..request.days)
        .map(|i| {
            let noise = rng.gen_range(-0.5..0.5) * profile.volatility * 0.5;
            profile.base_price * (1.0 + profile.trend * (i + 1) as f64 + noise)
        })
        .collect();

    QuickPrediction {
        symbol: request.symbol.to_uppercase(),
        predictions,
        confidence: confidence_for(&request.model_type),
        model: request.model_type.clone(),
        timestamp: iso_timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::predict::test_support::seeded;

    fn valid(symbol: &str, days: usize, model: &str) -> ValidatedRequest {
        ValidatedRequest {
            symbol: symbol.to_string(),
            days,
            model_type: model.to_string(),
        }
    }

    #[test]
    fn test_ensemble_request() {
        let table = SymbolTable::builtin();
        let result = quick_predict(&table, &valid("AAPL", 3, "ensemble"), &mut seeded());
        assert_eq!(result.symbol, "AAPL");
        assert_eq!(result.predictions.len(), 3);
        assert_eq!(result.confidence, 0.94);
        assert_eq!(result.model, "ensemble");
        assert!(result.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_predictions_stay_within_noise_band() {
        let table = SymbolTable::builtin();
        // AAPL: base 150, trend 0.001, volatility 0.02，噪声幅度 ±0.005
        let result = quick_predict(&table, &valid("aapl", 30, "lstm"), &mut seeded());
        assert_eq!(result.symbol, "AAPL");
        for (i, p) in result.predictions.iter().enumerate() {
            let center = 150.0 * (1.0 + 0.001 * (i + 1) as f64);
            assert!((p - center).abs() <= 150.0 * 0.005 + 1e-9);
        }
    }

    #[test]
    fn test_unknown_model_uses_default_confidence() {
        let table = SymbolTable::builtin();
        let result = quick_predict(&table, &valid("ZZZ", 2, "random-forest"), &mut seeded());
        assert_eq!(result.confidence, DEFAULT_CONFIDENCE);
        assert_eq!(result.model, "random-forest");
        assert_eq!(result.symbol, "ZZZ");
    }

    #[test]
    fn test_confidence_lookup() {
        assert_eq!(confidence_for("lstm"), 0.87);
        assert_eq!(confidence_for("arima"), 0.81);
        assert_eq!(confidence_for("linear"), 0.75);
        assert_eq!(confidence_for("ensemble"), 0.94);
        assert_eq!(confidence_for("LSTM"), 0.80);
    }
}
