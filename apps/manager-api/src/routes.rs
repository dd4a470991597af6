//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 受限用户自有资产：/assets/user/current
//! - 资产查询：/assets/root, /assets/{id}, /assets/{id}/children
//! - 资产变更：POST/PUT/DELETE /assets
//! - 属性写入：PUT /assets/attributes

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post, put},
};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route(
            "/assets/user/current",
            get(list_own_assets),
        )
        .route("/assets/user/current/:asset_id", put(update_own_asset))
        .route("/assets/root", get(list_root_assets))
        .route("/assets/attributes", put(update_attribute))
        .route("/assets", post(create_asset))
        .route(
            "/assets/:asset_id",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
        .route("/assets/:asset_id/children", get(list_children))
}
