//! 用户 HTTP 处理器
//!
//! 路径全部挂在 /users 下。集合操作同时注册带斜杠和不带斜杠两种路径，
//! 与原始接口的 `/users/` 写法保持兼容。

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use super::{
    model::{UpdateUser, User},
    service::UserService,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

/// 构建用户服务路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_info))
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/health", get(health_check))
}

/// 获取用户列表
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, CoreError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// 获取特定用户，不存在返回 404
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// 创建新用户，成功返回字面量 "success"
async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<&'static str>, CoreError> {
    state.user_service.create_user(user).await?;
    Ok(Json("success"))
}

/// 更新用户的 name 和 age
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<&'static str>, CoreError> {
    state.user_service.update_user(id, payload).await?;
    Ok(Json("success"))
}

/// 删除用户
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<&'static str>, CoreError> {
    state.user_service.delete_user(id).await?;
    Ok(Json("success"))
}

/// API 信息
async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "用户管理API",
        "version": "0.1.0",
        "description": "用于管理用户信息的API",
        "endpoints": {
            "GET /users": "获取用户列表",
            "POST /users": "创建新用户",
            "GET /users/:id": "获取特定用户",
            "PUT /users/:id": "更新用户信息",
            "DELETE /users/:id": "删除用户",
            "GET /health": "健康检查"
        }
    }))
}

/// 健康检查
async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    // list 同时充当后端连通性探测
    let users = state.user_service.list_users().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "backend": state.user_service.backend_name(),
        "users_count": users.len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
