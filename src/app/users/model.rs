//! 用户数据模型

use serde::{Deserialize, Serialize};

/// 用户实体
///
/// id 由调用方提供，创建后不可变；name 和 age 可以通过更新请求修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

/// 更新用户请求
///
/// 只携带可变字段，id 取自 URL 路径且永不改变。
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub name: String,
    pub age: i32,
}
