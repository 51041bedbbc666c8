//! 用户管理应用

pub mod handler;
pub mod model;
pub mod service;
pub mod store;
