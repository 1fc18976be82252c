//! 模拟行情服务
//!
//! - 股票参数表：启动时构建的只读映射
//! - 序列生成：趋势 + 噪声 + 季节项的模拟日K线
//! - 交易时段：美东时间开闭市判断

mod clock;
mod generator;
mod profiles;

pub use clock::market_status_now;
pub use generator::SeriesGenerator;
pub use profiles::SymbolTable;
