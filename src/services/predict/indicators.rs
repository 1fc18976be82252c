//! 指标计算辅助函数
//!
//! 全部为纯函数；样本不足或分母为零时返回 0

use crate::error::PredictError;
use crate::models::{PriceBar, MIN_PRICE};

/// 取最后 n 个元素，不足 n 个时返回全部
pub fn tail(values: &[f64], n: usize) -> &[f64] {
    &values[values.len().saturating_sub(n)..]
}

/// 最新价格
pub fn last_price(prices: &[f64]) -> Result<f64, PredictError> {
    prices.last().copied().ok_or(PredictError::EmptySeries)
}

/// 提取价格序列
pub fn prices(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|b| b.price).collect()
}

/// 提取成交量序列
pub fn volumes(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|b| b.volume as f64).collect()
}

/// 价格下限截断
pub fn clamp_price(price: f64) -> f64 {
    price.max(MIN_PRICE)
}

/// 均值，空序列为 0
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// 总体标准差
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// 简单收益率 (p[i] - p[i-1]) / p[i-1]
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

/// 窗口趋势 (last - first) / first / len
pub fn window_trend(prices: &[f64]) -> f64 {
    match (prices.first(), prices.last()) {
        (Some(first), Some(last)) if prices.len() >= 2 => {
            (last - first) / first / prices.len() as f64
        }
        _ => 0.0,
    }
}

/// 收益率波动率
pub fn returns_volatility(prices: &[f64]) -> f64 {
    if prices.len() < 2 {
        return 0.0;
    }
    std_dev(&simple_returns(prices))
}

/// 动量：最后 3 个价格均值相对前 3 个价格均值的变化
pub fn momentum(prices: &[f64]) -> f64 {
    if prices.len() < 2 {
        return 0.0;
    }
    let recent = mean(tail(prices, 3));
    let earlier = mean(&prices[..prices.len().min(3)]);
    (recent - earlier) / earlier
}

/// 周季节项：7 日收益率 (p[i] - p[i-7]) / p[i-7] 的均值，不足 14 个点为 0
pub fn weekly_seasonality(prices: &[f64]) -> f64 {
    if prices.len() < 14 {
        return 0.0;
    }
    let weekly: Vec<f64> = prices
        .windows(8)
        .map(|w| (w[7] - w[0]) / w[0])
        .collect();
    mean(&weekly)
}

/// 最小二乘斜率（自变量为下标 0..n）
///
/// slope = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)
pub fn linear_slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let n_f = n as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for (i, y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }
    let denominator = n_f * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return 0.0;
    }
    (n_f * sum_xy - sum_x * sum_y) / denominator
}

/// 皮尔逊相关系数，长度不一致、样本不足或方差为零时为 0
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return 0.0;
    }
    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_xx: f64 = x.iter().map(|a| a * a).sum();
    let sum_yy: f64 = y.iter().map(|b| b * b).sum();

    let denominator = ((n * sum_xx - sum_x * sum_x) * (n * sum_yy - sum_y * sum_y)).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    (n * sum_xy - sum_x * sum_y) / denominator
}

/// 检查预测结果是否全部为有限值
pub fn ensure_finite(predictions: &[f64], model: &str) -> Result<(), PredictError> {
    match predictions.iter().position(|p| !p.is_finite()) {
        Some(i) => Err(PredictError::Internal(format!(
            "{} 第 {} 天预测值非法: {}",
            model,
            i + 1,
            predictions[i]
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_tail() {
        let v = [1.0, 2.0, 3.0];
        assert_eq!(tail(&v, 2), &[2.0, 3.0]);
        assert_eq!(tail(&v, 10), &v);
    }

    #[test]
    fn test_linear_slope_perfect_line() {
        let prices: Vec<f64> = (1..=30).map(|v| v as f64).collect();
        assert!((linear_slope(&prices) - 1.0).abs() < EPS);

        let falling: Vec<f64> = (0..30).map(|v| 100.0 - 2.0 * v as f64).collect();
        assert!((linear_slope(&falling) + 2.0).abs() < EPS);
    }

    #[test]
    fn test_linear_slope_degenerate() {
        assert_eq!(linear_slope(&[]), 0.0);
        assert_eq!(linear_slope(&[5.0]), 0.0);
        assert!(linear_slope(&[5.0, 5.0, 5.0]).abs() < EPS);
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let prices: Vec<f64> = (1..=20).map(|v| v as f64).collect();
        let volumes: Vec<f64> = (1..=20).map(|v| 1_000_000.0 + 500.0 * v as f64).collect();
        assert!((pearson_correlation(&prices, &volumes) - 1.0).abs() < 1e-9);

        let inverse: Vec<f64> = prices.iter().map(|p| 100.0 - p).collect();
        assert!((pearson_correlation(&prices, &inverse) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_degenerate() {
        assert_eq!(pearson_correlation(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(pearson_correlation(&[1.0], &[1.0]), 0.0);
        assert_eq!(pearson_correlation(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]), 0.0);
    }

    #[test]
    fn test_returns_and_volatility() {
        let prices = [100.0, 110.0, 99.0];
        let returns = simple_returns(&prices);
        assert!((returns[0] - 0.1).abs() < EPS);
        assert!((returns[1] + 0.1).abs() < EPS);
        assert!((returns_volatility(&prices) - 0.1).abs() < EPS);
        assert_eq!(returns_volatility(&[100.0]), 0.0);
    }

    #[test]
    fn test_window_trend() {
        assert!((window_trend(&[100.0, 105.0, 110.0, 115.0, 120.0]) - 0.04).abs() < EPS);
        assert_eq!(window_trend(&[100.0]), 0.0);
    }

    #[test]
    fn test_momentum() {
        let prices = [10.0, 10.0, 10.0, 11.0, 12.0, 12.0, 12.0];
        assert!((momentum(&prices) - 0.2).abs() < EPS);
        assert_eq!(momentum(&[10.0]), 0.0);
    }

    #[test]
    fn test_weekly_seasonality() {
        assert_eq!(weekly_seasonality(&[1.0; 13]), 0.0);
        // 每 7 天翻倍的序列，周收益率恒为 1
        let prices: Vec<f64> = (0..21).map(|i| 2f64.powf(i as f64 / 7.0)).collect();
        assert!((weekly_seasonality(&prices) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(&[1.0, 2.0], "x").is_ok());
        assert!(matches!(
            ensure_finite(&[1.0, f64::NAN], "x"),
            Err(PredictError::Internal(_))
        ));
    }

    #[test]
    fn test_last_price_empty() {
        assert!(matches!(last_price(&[]), Err(PredictError::EmptySeries)));
    }
}
