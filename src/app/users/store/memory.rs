//! 内存存储后端
//!
//! 用单把互斥锁保护的 HashMap 模拟数据库，所有操作串行化，
//! 临界区只做 O(1)/O(n) 的 map 操作，不跨 await 持锁。

use std::{
    collections::HashMap,
    sync::Mutex,
};

use async_trait::async_trait;

use super::{StoreError, UserStore};
use crate::app::users::model::User;

/// 线程安全的内存用户存储
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<i64, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "in-memory"
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id).cloned())
    }

    async fn put(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.lock().unwrap();
        users.insert(user.id, user);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut users = self.users.lock().unwrap();
        Ok(users.remove(&id).is_some())
    }
}
