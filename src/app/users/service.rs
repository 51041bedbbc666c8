//! 用户业务服务
//!
//! 处理器与存储后端之间的薄层：负责存在性检查和错误映射。
//! 存储句柄在构造时显式传入，没有全局可变状态。

use std::sync::Arc;

use tracing::error;

use super::{
    model::{UpdateUser, User},
    store::{StoreError, UserStore},
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// 获取所有用户
    pub async fn list_users(&self) -> Result<Vec<User>, CoreError> {
        Ok(self.store.list().await.map_err(internal)?)
    }

    /// 按 id 获取用户，不存在返回 NotFound
    pub async fn get_user(&self, id: i64) -> Result<User, CoreError> {
        self.store
            .get(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| not_found(id))
    }

    /// 创建用户
    ///
    /// id 由调用方提供；重复的 id 会整体覆盖已有记录（put 语义）。
    pub async fn create_user(&self, user: User) -> Result<(), CoreError> {
        self.store.put(user).await.map_err(internal)
    }

    /// 更新用户的 name 和 age，id 保持不变
    ///
    /// 先做显式存在性检查，不存在返回 NotFound，绝不解引用缺失记录。
    pub async fn update_user(&self, id: i64, update: UpdateUser) -> Result<(), CoreError> {
        let mut user = self.get_user(id).await?;
        user.name = update.name;
        user.age = update.age;
        self.store.put(user).await.map_err(internal)
    }

    /// 删除用户，不存在返回 NotFound
    pub async fn delete_user(&self, id: i64) -> Result<(), CoreError> {
        let removed = self.store.delete(id).await.map_err(internal)?;
        if removed {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: i64) -> CoreError {
    CoreError::NotFound(format!("用户 {} 不存在", id))
}

fn internal(err: StoreError) -> CoreError {
    error!("存储后端错误: {}", err);
    CoreError::InternalServerError("存储后端错误".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::users::store::memory::MemoryStore;

    fn service() -> UserService {
        UserService::new(Arc::new(MemoryStore::new()))
    }

    fn user(id: i64, name: &str, age: i32) -> User {
        User {
            id,
            name: name.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let svc = service();
        match svc.get_user(1).await {
            Err(CoreError::NotFound(msg)) => assert_eq!(msg, "用户 1 不存在"),
            other => panic!("预期 NotFound，实际 {:?}", other.map(|u| u.id)),
        }
    }

    #[tokio::test]
    async fn test_update_keeps_id_immutable() {
        let svc = service();
        svc.create_user(user(1, "A", 20)).await.unwrap();
        svc.update_user(
            1,
            UpdateUser {
                name: "B".to_string(),
                age: 30,
            },
        )
        .await
        .unwrap();

        assert_eq!(svc.get_user(1).await.unwrap(), user(1, "B", 30));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let svc = service();
        let result = svc
            .update_user(
                42,
                UpdateUser {
                    name: "B".to_string(),
                    age: 30,
                },
            )
            .await;
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let svc = service();
        let result = svc.delete_user(42).await;
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }
}
