//! 股票数据模型
//! 
//! 定义模拟行情相关的数据结构

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 价格下限
pub const MIN_PRICE: f64 = 0.01;

/// 股票行情参数
///
/// 启动时构建，之后只读
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SymbolProfile {
    /// 股票代码（大写）
    pub symbol: String,
    /// 基准价格
    pub base_price: f64,
    /// 日漂移率
    pub trend: f64,
    /// 波动率
    pub volatility: f64,
}

/// 模拟日K线
/// 
/// 序列按日期升序排列，第 i 根的开盘价等于第 i-1 根的价格
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PriceBar {
    /// 日期
    pub date: NaiveDate,
    /// 价格（不低于 0.01）
    pub price: f64,
    /// 成交量
    pub volume: u64,
    /// 最高价
    pub high: f64,
    /// 最低价
    pub low: f64,
    /// 开盘价
    pub open: f64,
}

/// 历史K线查询参数
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// 生成天数
    pub days: Option<usize>,
}
