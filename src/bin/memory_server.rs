//! 用户管理服务（内存存储版）
//!
//! 所有用户状态保存在单把互斥锁保护的 HashMap 中，进程退出即丢失。

use std::{sync::Arc, time::Duration};

use axum::middleware;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use user_service::{
    app::users::{
        handler::{routes, AppState},
        service::UserService,
        store::memory::MemoryStore,
    },
    core::middleware::request_logging_middleware,
    infrastructure::{config::ServerConfig, logger::Logger},
};

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init();

    info!("启动用户管理服务 (内存存储)...");

    // 显式构造存储后端并注入，没有全局共享状态
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        user_service: UserService::new(store),
    };

    let app = routes()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .with_state(state);

    let config = ServerConfig::from_env("127.0.0.1:3001");
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("无法绑定监听地址");

    info!("🚀 用户管理服务运行在 http://{}", config.bind_addr);
    info!("📖 API 端点:");
    info!("   GET    /users       - 获取用户列表");
    info!("   POST   /users       - 创建新用户");
    info!("   GET    /users/:id   - 获取特定用户");
    info!("   PUT    /users/:id   - 更新用户信息");
    info!("   DELETE /users/:id   - 删除用户");
    info!("   GET    /health      - 健康检查");

    axum::serve(listener, app).await.expect("服务器启动失败");
}
