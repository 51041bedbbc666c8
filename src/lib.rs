//! # 用户管理服务
//!
//! 一个基于 Axum 的用户 CRUD REST 服务，提供两种可互换的存储后端：
//! - 内存存储：基于 `Mutex<HashMap>` 的线程安全容器
//! - 数据库存储：基于 SQLx 的关系表持久化网关
//!
//! HTTP 层、业务层与存储层通过 `UserStore` trait 解耦，
//! 两个二进制入口（`memory_server` / `database_server`）在启动时
//! 显式构造各自的存储后端并注入。

pub mod app;
pub mod core;
pub mod infrastructure;
