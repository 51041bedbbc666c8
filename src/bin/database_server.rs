//! 用户管理服务（数据库存储版）
//!
//! 用户状态持久化到关系表 users (id PRIMARY KEY, name, age)，
//! 连接串通过 DATABASE_URL 环境变量配置。

use std::{sync::Arc, time::Duration};

use axum::middleware;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

use user_service::{
    app::users::{
        handler::{routes, AppState},
        service::UserService,
        store::database::DatabaseStore,
    },
    core::middleware::request_logging_middleware,
    infrastructure::{
        config::{DatabaseConfig, ServerConfig},
        database::DatabaseManager,
        logger::Logger,
    },
};

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init();

    info!("启动用户管理服务 (数据库存储)...");

    // 建立连接池并初始化表结构
    let db_config = DatabaseConfig::from_env();
    info!("连接数据库: {}", db_config.url);

    let manager = match DatabaseManager::new(&db_config.url).await {
        Ok(manager) => manager,
        Err(e) => {
            error!("数据库连接失败: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = manager.migrate().await {
        error!("数据表初始化失败: {}", e);
        std::process::exit(1);
    }

    // 显式构造持久化网关并注入
    let store = Arc::new(DatabaseStore::new(manager.get_pool().clone()));
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

    let config = ServerConfig::from_env("127.0.0.1:3003");
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
