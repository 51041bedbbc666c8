//! 数据库基础设施

use sqlx::{
    sqlite::{SqlitePool, SqlitePoolOptions},
    Error,
};
use std::time::Duration;
use tracing::info;

pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// 建立连接池
    ///
    /// SQLite 的 `sqlite::memory:` 连接串是按连接隔离的，
    /// 多个连接会各自拿到一个空库，因此连接池上限固定为 1。
    pub async fn new(database_url: &str) -> Result<Self, Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(8))
            // 内存数据库随连接一起消失，不允许连接池回收这条连接
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// 创建数据表（实际项目中应使用迁移工具）
    pub async fn migrate(&self) -> Result<(), Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("数据表初始化完成");
        Ok(())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}
