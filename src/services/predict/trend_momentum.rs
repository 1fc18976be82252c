//! 趋势动量公式（LSTM 标签）
//!
//! 短/中/长期窗口趋势加权 + 指数衰减动量 + 按波动率缩放的噪声

use rand::{Rng, RngCore};

use crate::error::PredictError;
use crate::models::{ModelType, PriceBar, PredictionResult};
use super::indicators::{clamp_price, last_price, momentum, prices, returns_volatility, tail, window_trend};
use super::PricePredictor;

#[derive(Debug, Default, Clone, Copy)]
pub struct TrendMomentumModel;

impl PricePredictor for TrendMomentumModel {
    fn model_type(&self) -> ModelType {
        ModelType::Lstm
    }

    fn label(&self) -> &'static str {
        "LSTM Neural Network"
    }

    fn features(&self) -> &'static [&'static str] {
        &["Price", "Volume", "Momentum", "Volatility"]
    }

    fn predict(
        &self,
        bars: &[PriceBar],
        days: usize,
        rng: &mut dyn RngCore,
    ) -> Result<PredictionResult, PredictError> {
        let prices = prices(bars);
        let last = last_price(&prices)?;

        let short_term = window_trend(tail(&prices, 5));
        let medium_term = window_trend(tail(&prices, 20));
        let long_term = window_trend(tail(&prices, 50));
        let volatility = returns_volatility(tail(&prices, 20));
        let momentum = momentum(tail(&prices, 10));

        let trend_component = short_term * 0.5 + medium_term * 0.3 + long_term * 0.2;

        let predictions = (1..=days)
            .map(|i| {
                let step = i as f64;
                let noise = rng.gen_range(-0.5..0.5) * volatility * 0.3;
                let momentum_component = momentum * (-0.1 * step).exp();
                clamp_price(last * (1.0 + trend_component * step + momentum_component + noise))
            })
            .collect();

        self.finish(predictions)
    }
}
