//! 属性写入 handler
//!
//! - PUT /assets/attributes - 写入单个资产属性
//!
//! 授权通过后事件转交处理协作方；处理失败由网关归类为 400。

use crate::AppState;
use crate::middleware::require_identity;
use crate::utils::normalize_required;
use crate::utils::response::access_error;
use api_contract::{ApiResponse, AttributeStateRequest};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use domain::{AttributeRef, AttributeState};

/// 写入单个资产属性
pub async fn update_attribute(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AttributeStateRequest>,
) -> Response {
    let identity = match require_identity(&state, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };
    let entity_id = match normalize_required(req.entity_id, "entityId") {
        Ok(entity_id) => entity_id,
        Err(response) => return response,
    };
    let attribute_name = match normalize_required(req.attribute_name, "attributeName") {
        Ok(attribute_name) => attribute_name,
        Err(response) => return response,
    };
    let attribute_state = AttributeState::new(
        AttributeRef::new(entity_id, attribute_name),
        req.value,
    );
    match state
        .gateway
        .update_attribute(&identity, attribute_state)
        .await
    {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Err(err) => access_error(err),
    }
}
