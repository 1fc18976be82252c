//! 加权集成
//!
//! predicted[i] = 0.5 * lstm[i] + 0.3 * arima[i] + 0.2 * linear[i]

use rand::RngCore;

use crate::error::PredictError;
use crate::models::{EnsembleComponents, EnsembleWeights, ModelType, PriceBar, PredictionResult};
use super::{LinearModel, PricePredictor, SeasonalArModel, TrendMomentumModel};

#[derive(Debug, Default, Clone, Copy)]
pub struct EnsembleModel {
    weights: EnsembleWeights,
}

impl EnsembleModel {
    pub const fn new(weights: EnsembleWeights) -> Self {
        Self { weights }
    }
}

impl PricePredictor for EnsembleModel {
    fn model_type(&self) -> ModelType {
        ModelType::Ensemble
    }

    fn label(&self) -> &'static str {
        "Ensemble Model"
    }

    fn predict(
        &self,
        bars: &[PriceBar],
        days: usize,
        rng: &mut dyn RngCore,
    ) -> Result<PredictionResult, PredictError> {
        let lstm = TrendMomentumModel.predict(bars, days, rng)?;
        let arima = SeasonalArModel.predict(bars, days, rng)?;
        let linear = LinearModel.predict(bars, days, rng)?;

        let w = self.weights;
        let predictions: Vec<f64> = lstm
            .predictions
            .iter()
            .zip(&arima.predictions)
            .zip(&linear.predictions)
            .map(|((l, a), r)| l * w.lstm + a * w.arima + r * w.linear)
            .collect();

        let mut result = self.finish(predictions)?;
        result.components = Some(Box::new(EnsembleComponents { lstm, arima, linear }));
        result.weights = Some(w);
        Ok(result)
    }
}
