//! 配置基础设施
//!
//! 所有配置都在启动时从环境变量读取，没有配置文件。

use std::env;

/// 服务器配置
pub struct ServerConfig {
    pub bind_addr: String,
}

impl ServerConfig {
    /// 从环境变量 SERVER_ADDR 读取监听地址，缺省时使用给定的默认值
    pub fn from_env(default_addr: &str) -> Self {
        Self {
            bind_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| default_addr.to_string()),
        }
    }
}

/// 数据库配置
#[cfg(feature = "database")]
pub struct DatabaseConfig {
    pub url: String,
}

#[cfg(feature = "database")]
impl DatabaseConfig {
    /// 从环境变量 DATABASE_URL 读取连接串
    ///
    /// 文件数据库请使用 `sqlite://users.db?mode=rwc` 形式；
    /// 默认值为进程内数据库 `sqlite::memory:`。
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string()),
        }
    }
}
