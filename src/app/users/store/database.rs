//! 数据库存储后端
//!
//! 每个逻辑操作翻译成一条单行 SQL 语句，表结构为
//! `users (id INTEGER PRIMARY KEY, name TEXT, age INTEGER)`。

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use super::{StoreError, UserStore};
use crate::app::users::model::User;

/// SQLx 持久化网关
pub struct DatabaseStore {
    pool: SqlitePool,
}

impl DatabaseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for DatabaseStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, age FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn get(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, age FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn put(&self, user: User) -> Result<(), StoreError> {
        // 单条 upsert 保持 put 的"插入或覆盖"语义
        sqlx::query(
            r#"
            INSERT INTO users (id, name, age) VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET name = excluded.name, age = excluded.age
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(user.age)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
