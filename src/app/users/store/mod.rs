//! 存储后端抽象
//!
//! `UserStore` 是用户状态的唯一权威接口，提供四个逻辑操作：
//! list / get / put / delete。两个实现：
//! - `memory::MemoryStore`：单把互斥锁保护的进程内 HashMap
//! - `database::DatabaseStore`：SQLx 驱动的关系表网关

pub mod memory;

#[cfg(feature = "database")]
pub mod database;

use async_trait::async_trait;

use super::model::User;

/// 存储层错误
#[derive(Debug)]
pub enum StoreError {
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Backend(msg) => write!(f, "存储后端错误: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

#[cfg(feature = "database")]
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// 用户存储接口
///
/// put 的语义是"插入或覆盖"：以 user.id 为键，存在即整体替换，
/// 不做重复或缺失字段的校验。delete 返回是否真的删除了一条记录，
/// 以便上层对不存在的 id 给出确定的未找到响应。
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 后端类型名，用于健康检查输出
    fn backend_name(&self) -> &'static str;

    /// 返回所有用户，顺序不保证
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// 按 id 查找用户
    async fn get(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// 插入或覆盖以 user.id 为键的记录
    async fn put(&self, user: User) -> Result<(), StoreError>;

    /// 删除记录，返回删除前该记录是否存在
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
