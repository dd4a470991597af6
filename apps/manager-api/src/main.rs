//! 资产授权 HTTP API：资产网关操作 + 身份提取 + 请求追踪 ID。

mod handlers;
mod middleware;
mod routes;
mod utils;

use axum::middleware as axum_middleware;
use manager_access::{AssetGateway, NoopProcessor};
use manager_auth::JwtManager;
use manager_config::AppConfig;
use manager_storage::InMemoryAssetStore;
use manager_telemetry::init_tracing;
use std::sync::Arc;

/// 应用状态：网关与 token 校验器。
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<AssetGateway>,
    pub jwt: Arc<JwtManager>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 存储与属性处理是外部协作方；本地演示用内存实现与占位处理器接线
    let store = Arc::new(InMemoryAssetStore::new());
    let processor = Arc::new(NoopProcessor);
    let gateway = Arc::new(AssetGateway::new(store, processor));
    let jwt = Arc::new(JwtManager::new(
        config.jwt_secret.clone(),
        config.jwt_access_ttl_seconds,
    ));
    let state = AppState { gateway, jwt };

    let app = routes::create_api_router()
        .with_state(state)
        // 注入 request_id/trace_id
        .layer(axum_middleware::from_fn(middleware::request_context))
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
