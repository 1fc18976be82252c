//! 美股交易时段模型

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 市场状态
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MarketStatus {
    /// 是否工作日（周一至周五）
    pub is_weekday: bool,
    /// 当前是否开盘
    pub is_open: bool,
    /// 下一次开盘时间（美东时间）
    pub next_open: NaiveDateTime,
    /// 状态描述
    pub message: String,
}
