//! 季节自回归公式（ARIMA 标签）
//!
//! predicted = last * (1 + trend + seasonal * sin(iπ/7) + ar * e^(-0.1i))

use std::f64::consts::PI;

use rand::RngCore;

use crate::error::PredictError;
use crate::models::{ModelType, PriceBar, PredictionResult};
use super::indicators::{clamp_price, last_price, mean, prices, simple_returns, tail, weekly_seasonality};
use super::PricePredictor;

#[derive(Debug, Default, Clone, Copy)]
pub struct SeasonalArModel;

impl SeasonalArModel {
    /// 最近 10 个收益率均值
    pub fn trend(prices: &[f64]) -> f64 {
        mean(tail(&simple_returns(prices), 10))
    }

    /// 最近 3 个收益率均值，不足 5 个价格为 0
    pub fn autoregressive(prices: &[f64]) -> f64 {
        if prices.len() < 5 {
            return 0.0;
        }
        mean(tail(&simple_returns(prices), 3))
    }
}

impl PricePredictor for SeasonalArModel {
    fn model_type(&self) -> ModelType {
        ModelType::Arima
    }

    fn label(&self) -> &'static str {
        "ARIMA Time Series"
    }

    fn features(&self) -> &'static [&'static str] {
        &["Trend", "Seasonality", "Autoregression"]
    }

    fn predict(
        &self,
        bars: &[PriceBar],
        days: usize,
        _rng: &mut dyn RngCore,
    ) -> Result<PredictionResult, PredictError> {
        let prices = prices(bars);
        let last = last_price(&prices)?;

        let trend = Self::trend(&prices);
        let seasonal = weekly_seasonality(&prices);
        let autoregressive = Self::autoregressive(&prices);

        let predictions = (1..=days)
            .map(|i| {
                let step = i as f64;
                clamp_price(
                    last * (1.0
                        + trend
                        + seasonal * (step * PI / 7.0).sin()
                        + autoregressive * (-0.1 * step).exp()),
                )
            })
            .collect();

        self.finish(predictions)
    }
}
