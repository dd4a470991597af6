//! Handlers 模块

pub mod assets;
pub mod attributes;

pub use assets::*;
pub use attributes::*;

use axum::{Json, response::IntoResponse};

/// 健康检查
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}
