//! 基础设施模块：日志、配置与数据库连接管理

pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod logger;
