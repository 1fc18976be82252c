//! 业务逻辑服务模块
//! 
//! 封装模拟行情生成和预测计算逻辑

pub mod market;   // 模拟行情服务
pub mod predict;  // 预测服务
