//! 线性回归公式
//!
//! 价格斜率外推，叠加成交量斜率与量价相关性的修正项

use rand::RngCore;

use crate::error::PredictError;
use crate::models::{ModelType, PriceBar, PredictionResult};
use super::indicators::{clamp_price, last_price, linear_slope, pearson_correlation, prices, tail, volumes};
use super::PricePredictor;

#[derive(Debug, Default, Clone, Copy)]
pub struct LinearModel;

impl PricePredictor for LinearModel {
    fn model_type(&self) -> ModelType {
        ModelType::Linear
    }

    fn label(&self) -> &'static str {
        "Linear Regression"
    }

    fn features(&self) -> &'static [&'static str] {
        &["Price Trend", "Volume Trend", "Correlation"]
    }

    fn predict(
        &self,
        bars: &[PriceBar],
        days: usize,
        _rng: &mut dyn RngCore,
    ) -> Result<PredictionResult, PredictError> {
        let prices = prices(bars);
        let volumes = volumes(bars);
        let last = last_price(&prices)?;

        let price_slope = linear_slope(tail(&prices, 30));
        let volume_slope = linear_slope(tail(&volumes, 30));
        let correlation = pearson_correlation(tail(&prices, 20), tail(&volumes, 20));
        let volume_adjustment = volume_slope * correlation * 0.001;

        let predictions = (1..=days)
            .map(|i| clamp_price(last + price_slope * i as f64 + volume_adjustment))
            .collect();

        self.finish(predictions)
    }
}
