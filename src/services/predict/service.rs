//! 完整预测流程
//!
//! 校验请求 → 生成模拟序列 → 运行公式 → 生成摘要。
//! 每次请求独立创建随机数发生器，服务本身只读，可在多个 worker 间共享。

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::PredictionConfig;
use crate::error::PredictError;
use crate::models::{
    ModelType, PredictionReport, PredictionRequest, PredictionSummary, PriceBar, QuickPrediction,
    Recommendation, SymbolProfile, ValidatedRequest,
};
use crate::services::market::{SeriesGenerator, SymbolTable};
use super::{predictor_for, quick_predict};

pub struct PredictionService {
    table: Arc<SymbolTable>,
    generator: SeriesGenerator,
    config: PredictionConfig,
}

impl PredictionService {
    pub fn new(table: Arc<SymbolTable>, config: PredictionConfig) -> Self {
        Self {
            generator: SeriesGenerator::new(table.clone()),
            table,
            config,
        }
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn profile(&self, symbol: &str) -> SymbolProfile {
        self.table.resolve(symbol)
    }

    /// 本次请求的随机数发生器：配置了种子则可复现，否则取系统熵
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// 运行完整预测流程
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionReport, PredictError> {
        let mut rng = self.rng();
        self.predict_with(request, &mut rng)
    }

    /// 使用指定随机源运行完整预测流程
    pub fn predict_with(
        &self,
        request: &PredictionRequest,
        rng: &mut dyn RngCore,
    ) -> Result<PredictionReport, PredictError> {
        let valid = self.validate(request)?;
        let model_type: ModelType = valid.model_type.parse()?;
        let profile = self.table.resolve(&valid.symbol);

        let bars = self.generator.generate(&profile.symbol, self.config.history_days, rng);
        let result = predictor_for(model_type).predict(&bars, valid.days, rng)?;

        log::debug!(
            "{} 使用 {} 预测 {} 天，历史 {} 根K线",
            profile.symbol,
            model_type,
            valid.days,
            bars.len()
        );

        let summary = summarize(profile.base_price, &result.predictions);
        Ok(PredictionReport {
            symbol: profile.symbol,
            model_type,
            days: valid.days,
            result,
            summary,
        })
    }

    /// 独立预测接口：不生成序列，直接由股票参数外推
    ///
    /// 只校验必填字段，预测天数不受 max_horizon 限制
    pub fn quick(&self, request: &PredictionRequest) -> Result<QuickPrediction, PredictError> {
        let valid = request.validate()?;
        let mut rng = self.rng();
        Ok(quick_predict(&self.table, &valid, &mut rng))
    }

    /// 生成模拟历史K线
    pub fn history(&self, symbol: &str, days: Option<usize>) -> Result<Vec<PriceBar>, PredictError> {
        let days = days.unwrap_or(self.config.history_days);
        if days > self.config.max_history_days {
            return Err(PredictError::Validation(format!(
                "days 不能超过 {}",
                self.config.max_history_days
            )));
        }
        let mut rng = self.rng();
        Ok(self.generator.generate(symbol, days, &mut rng))
    }

    fn validate(&self, request: &PredictionRequest) -> Result<ValidatedRequest, PredictError> {
        let valid = request.validate()?;
        if valid.days > self.config.max_horizon {
            return Err(PredictError::Validation(format!(
                "days 不能超过 {}",
                self.config.max_horizon
            )));
        }
        Ok(valid)
    }
}

/// 根据预测结果生成摘要，预测为空时返回 None
pub fn summarize(current_price: f64, predictions: &[f64]) -> Option<PredictionSummary> {
    let next_day = *predictions.first()?;
    let target = *predictions.last()?;
    let change = target - current_price;
    let change_percent = if current_price != 0.0 {
        change / current_price * 100.0
    } else {
        0.0
    };

    Some(PredictionSummary {
        current_price,
        next_day,
        target,
        change,
        change_percent,
        recommendation: if change >= 0.0 {
            Recommendation::Buy
        } else {
            Recommendation::Sell
        },
    })
}
