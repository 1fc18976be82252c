//! 预测服务模块
//!
//! 四个预测公式实现统一的 [`PricePredictor`] 接口，按 [`ModelType`] 分发：
//! - lstm: 趋势动量公式
//! - arima: 季节自回归公式
//! - linear: 线性回归公式
//! - ensemble: 前三者的固定权重组合

pub mod indicators;
mod ensemble;
mod linear;
mod quick;
mod seasonal_ar;
mod service;
mod trend_momentum;

pub use ensemble::EnsembleModel;
pub use linear::LinearModel;
pub use quick::quick_predict;
pub use seasonal_ar::SeasonalArModel;
pub use service::PredictionService;
pub use trend_momentum::TrendMomentumModel;

use rand::RngCore;

use crate::error::PredictError;
use crate::models::{ModelInfo, ModelType, PriceBar, PredictionResult, DEFAULT_ENSEMBLE_WEIGHTS};
use indicators::ensure_finite;

/// 预测公式接口
///
/// 输入按日期升序的K线序列与预测天数，输出等长的预测价格序列
pub trait PricePredictor: Send + Sync {
    fn model_type(&self) -> ModelType;

    /// 展示名称
    fn label(&self) -> &'static str;

    fn features(&self) -> &'static [&'static str] {
        &[]
    }

    fn confidence(&self) -> f64 {
        self.model_type().confidence()
    }

    fn predict(
        &self,
        bars: &[PriceBar],
        days: usize,
        rng: &mut dyn RngCore,
    ) -> Result<PredictionResult, PredictError>;

    /// 组装结果，拒绝 NaN/无穷大
    fn finish(&self, predictions: Vec<f64>) -> Result<PredictionResult, PredictError> {
        ensure_finite(&predictions, self.label())?;
        Ok(PredictionResult {
            predictions,
            confidence: self.confidence(),
            model: self.label().to_string(),
            features: self.features().iter().map(|f| f.to_string()).collect(),
            components: None,
            weights: None,
        })
    }
}

static TREND_MOMENTUM: TrendMomentumModel = TrendMomentumModel;
static SEASONAL_AR: SeasonalArModel = SeasonalArModel;
static LINEAR: LinearModel = LinearModel;
static ENSEMBLE: EnsembleModel = EnsembleModel::new(DEFAULT_ENSEMBLE_WEIGHTS);

/// 按模型类型取预测公式
pub fn predictor_for(model: ModelType) -> &'static dyn PricePredictor {
    match model {
        ModelType::Lstm => &TREND_MOMENTUM,
        ModelType::Arima => &SEASONAL_AR,
        ModelType::Linear => &LINEAR,
        ModelType::Ensemble => &ENSEMBLE,
    }
}

/// 模型目录
pub fn model_catalog() -> Vec<ModelInfo> {
    ModelType::ALL
        .iter()
        .map(|model| {
            let predictor = predictor_for(*model);
            ModelInfo {
                model_type: *model,
                label: predictor.label().to_string(),
                confidence: predictor.confidence(),
                features: predictor.features().iter().map(|f| f.to_string()).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use chrono::{Duration, NaiveDate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::models::PriceBar;
    use crate::services::market::{SeriesGenerator, SymbolTable};

    pub fn seeded() -> StdRng {
        StdRng::seed_from_u64(20240101)
    }

    /// 由价格与成交量构造K线
    pub fn bars_from_series(prices: &[f64], volumes: &[u64]) -> Vec<PriceBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        prices
            .iter()
            .zip(volumes)
            .enumerate()
            .map(|(i, (price, volume))| PriceBar {
                date: start + Duration::days(i as i64),
                price: *price,
                volume: *volume,
                high: *price,
                low: *price,
                open: if i == 0 { *price } else { prices[i - 1] },
            })
            .collect()
    }

    pub fn bars_from_prices(prices: &[f64]) -> Vec<PriceBar> {
        bars_from_series(prices, &vec![1_000_000; prices.len()])
    }

    pub fn random_bars(symbol: &str, days: usize) -> Vec<PriceBar> {
        let gen = SeriesGenerator::new(Arc::new(SymbolTable::builtin()));
        gen.generate(symbol, days, &mut seeded())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{random_bars, seeded};
    use super::*;

    #[test]
    fn test_all_models_honor_horizon_and_floor() {
        for symbol in ["AAPL", "PELOTON", "ZM", "UNKNOWN"] {
            let bars = random_bars(symbol, 100);
            for model in ModelType::ALL {
                for days in [0usize, 1, 7, 30, 90] {
                    let result = predictor_for(model).predict(&bars, days, &mut seeded()).unwrap();
                    assert_eq!(result.predictions.len(), days, "{} {} {}", symbol, model, days);
                    assert!(result.predictions.iter().all(|p| *p >= 0.01));
                }
            }
        }
    }

    #[test]
    fn test_confidence_is_data_independent() {
        let expected = [
            (ModelType::Lstm, 0.87),
            (ModelType::Arima, 0.81),
            (ModelType::Linear, 0.75),
            (ModelType::Ensemble, 0.94),
        ];
        for symbol in ["AAPL", "GOOGL"] {
            let bars = random_bars(symbol, 60);
            for (model, confidence) in expected {
                let result = predictor_for(model).predict(&bars, 5, &mut seeded()).unwrap();
                assert_eq!(result.confidence, confidence);
            }
        }
    }

    #[test]
    fn test_dispatch_matches_model_type() {
        for model in ModelType::ALL {
            assert_eq!(predictor_for(model).model_type(), model);
        }
    }

    #[test]
    fn test_model_catalog() {
        let catalog = model_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[0].label, "LSTM Neural Network");
        assert_eq!(catalog[3].model_type, ModelType::Ensemble);
        assert!(catalog[3].features.is_empty());
    }
}
