//! 股票参数表

use std::collections::HashMap;

use crate::models::SymbolProfile;

/// 未知代码使用的默认参数
pub const DEFAULT_BASE_PRICE: f64 = 100.0;
pub const DEFAULT_TREND: f64 = 0.0005;
pub const DEFAULT_VOLATILITY: f64 = 0.02;

/// 内置股票参数：(代码, 基准价格, 日漂移率, 波动率)
const BUILTIN_PROFILES: [(&str, f64, f64, f64); 20] = [
    ("AAPL", 150.0, 0.001, 0.02),
    ("MSFT", 300.0, 0.0008, 0.018),
    ("GOOGL", 2500.0, 0.0005, 0.025),
    ("AMZN", 3000.0, 0.0003, 0.03),
    ("TSLA", 200.0, 0.002, 0.05),
    ("NVDA", 400.0, 0.0015, 0.04),
    ("META", 300.0, 0.0007, 0.03),
    ("NFLX", 400.0, 0.0004, 0.035),
    ("AMD", 120.0, 0.0012, 0.045),
    ("INTC", 45.0, 0.0002, 0.025),
    ("CRM", 200.0, 0.0006, 0.035),
    ("ADBE", 500.0, 0.0008, 0.03),
    ("PYPL", 60.0, 0.0003, 0.04),
    ("UBER", 40.0, 0.0004, 0.05),
    ("SPOT", 150.0, 0.0005, 0.04),
    ("SQ", 50.0, 0.0007, 0.06),
    ("ZM", 80.0, -0.0002, 0.05),
    ("SHOP", 60.0, 0.0006, 0.06),
    ("ROKU", 70.0, 0.0003, 0.07),
    ("PELOTON", 15.0, -0.0005, 0.08),
];

/// 股票参数表
///
/// 启动时构建一次，通过 Arc 共享给序列生成和独立预测接口
#[derive(Debug, Clone)]
pub struct SymbolTable {
    profiles: HashMap<String, SymbolProfile>,
    /// 保持内置顺序，用于列表接口
    order: Vec<String>,
}

impl SymbolTable {
    /// 使用内置参数构建
    pub fn builtin() -> Self {
        Self::from_profiles(BUILTIN_PROFILES.iter().map(|(symbol, base_price, trend, volatility)| {
            SymbolProfile {
                symbol: symbol.to_string(),
                base_price: *base_price,
                trend: *trend,
                volatility: *volatility,
            }
        }))
    }

    /// 从任意参数集合构建，代码统一转为大写，重复代码以后者为准
    pub fn from_profiles<I: IntoIterator<Item = SymbolProfile>>(profiles: I) -> Self {
        let mut map = HashMap::new();
        let mut order = Vec::new();
        for mut profile in profiles {
            profile.symbol = profile.symbol.to_uppercase();
            if !map.contains_key(&profile.symbol) {
                order.push(profile.symbol.clone());
            }
            map.insert(profile.symbol.clone(), profile);
        }
        Self { profiles: map, order }
    }

    /// 查询股票参数，未知代码返回默认参数
    pub fn resolve(&self, symbol: &str) -> SymbolProfile {
        let key = symbol.trim().to_uppercase();
        match self.profiles.get(&key) {
            Some(profile) => profile.clone(),
            None => {
                log::debug!("未知股票代码 {}，使用默认参数", key);
                SymbolProfile {
                    symbol: key,
                    base_price: DEFAULT_BASE_PRICE,
                    trend: DEFAULT_TREND,
                    volatility: DEFAULT_VOLATILITY,
                }
            }
        }
    }

    /// 按内置顺序列出全部参数
    pub fn profiles(&self) -> Vec<&SymbolProfile> {
        self.order.iter().filter_map(|s| self.profiles.get(s)).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::builtin()
    }
}
