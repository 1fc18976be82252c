//! 模拟日K线生成
//!
//! 第 i 天的价格：
//! price = base * (1 + trend * i + random * volatility + sin(i * π / 30) * 0.01)
//! 其中 random ~ U(-1, 1)，价格下限 0.01

use std::f64::consts::PI;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use rand::{Rng, RngCore};

use crate::models::{PriceBar, SymbolProfile, MIN_PRICE};
use super::SymbolTable;
/// 成交量基数
const BASE_VOLUME: u64 = 1_000_000;
/// 成交量随机区间上界（不含）
const VOLUME_SPREAD: u64 = 10_000_000;
/// 最高/最低价相对价格的最大偏离
const INTRADAY_RANGE: f64 = 0.02;

/// 模拟序列生成器
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    table: Arc<SymbolTable>,
}

impl SeriesGenerator {
    pub fn new(table: Arc<SymbolTable>) -> Self {
        Self { table }
    }

    /// 生成截至今天（UTC）的 num_days 根日K线
    pub fn generate(&self, symbol: &str, num_days: usize, rng: &mut dyn RngCore) -> Vec<PriceBar> {
        self.generate_until(symbol, num_days, Utc::now().date_naive(), rng)
    }

    /// 生成截至 end 的 num_days 根日K线，第 i 根日期为 end - (num_days - i) 天
    pub fn generate_until(
        &self,
        symbol: &str,
        num_days: usize,
        end: NaiveDate,
        rng: &mut dyn RngCore,
    ) -> Vec<PriceBar> {
        let profile = self.table.resolve(symbol);
        generate_series(&profile, num_days, end, rng)
    }
}

/// 按给定参数生成序列
pub fn generate_series(
    profile: &SymbolProfile,
    num_days: usize,
    end: NaiveDate,
    rng: &mut dyn RngCore,
) -> Vec<PriceBar> {
    let mut bars: Vec<PriceBar> = Vec::with_capacity(num_days);

    for i in 0..num_days {
        let step = i as f64;
        let seasonal = (step * PI / 30.0).sin() * 0.01;
        let random: f64 = rng.gen_range(-1.0..1.0);

        let raw = profile.base_price
            * (1.0 + profile.trend * step + random * profile.volatility + seasonal);
        let price = raw.max(MIN_PRICE);

        let volume = rng.gen_range(0..VOLUME_SPREAD) + BASE_VOLUME;
        let high = price * (1.0 + rng.gen_range(0.0..INTRADAY_RANGE));
        let low = price * (1.0 - rng.gen_range(0.0..INTRADAY_RANGE));
        let open = bars.last().map(|prev| prev.price).unwrap_or(price);
        let date = end - Duration::days((num_days - i) as i64);

        bars.push(PriceBar {
            date,
            price,
            volume,
            high,
            low,
            open,
        });
    }

    bars
}
