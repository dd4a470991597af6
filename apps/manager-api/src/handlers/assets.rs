//! 资产 handlers
//!
//! 提供资产资源的查询与增删改接口：
//! - GET /assets/user/current - 受限用户列出自己的受保护资产
//! - PUT /assets/user/current/{id} - 受限用户自有资产更新（显式未实现）
//! - GET /assets/root?realm= - 列出根资产
//! - GET /assets/{id}/children - 列出子资产
//! - GET /assets/{id} - 获取资产详情
//! - POST /assets - 创建资产
//! - PUT /assets/{id} - 更新资产
//! - DELETE /assets/{id} - 删除资产
//!
//! 权限要求：
//! - 所有接口需要 Bearer token 认证
//! - 授权决策全部由资产网关完成，handler 只做 DTO 映射

use crate::AppState;
use crate::middleware::require_identity;
use crate::utils::response::{access_error, asset_to_dto, attribute_from_dto, protected_to_dto};
use crate::utils::{normalize_client_asset_id, normalize_optional, normalize_required};
use api_contract::{ApiResponse, AssetDto, CreateAssetRequest, ProtectedAssetDto, UpdateAssetRequest};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use manager_access::gateway::{AssetDraft, AssetPatch};

#[derive(serde::Deserialize)]
pub struct AssetPath {
    asset_id: String,
}

#[derive(serde::Deserialize)]
pub struct RootQuery {
    realm: Option<String>,
}

/// 列出调用方自己的受保护资产
///
/// 仅受限用户得到非空结果；关联 realm 与认证 realm 不一致的条目
/// 已在网关侧被排除。
///
/// # 流程
///
/// 1. 调用 `require_identity` 校验 Bearer token
/// 2. 调用 `gateway.list_own_assets` 获取过滤后的关联列表
/// 3. 转换为 `ProtectedAssetDto` 列表并返回统一响应格式
///
/// # 错误处理
///
/// - `401 UNAUTHORIZED`: 认证失败（token 无效或过期）
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn list_own_assets(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let identity = match require_identity(&state, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };
    match state.gateway.list_own_assets(&identity).await {
        Ok(items) => {
            let data: Vec<ProtectedAssetDto> = items.into_iter().map(protected_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => access_error(err),
    }
}

/// 受限用户更新自有资产（显式未实现，返回 501）
pub async fn update_own_asset(
    State(state): State<AppState>,
    Path(path): Path<AssetPath>,
    headers: HeaderMap,
) -> Response {
    let identity = match require_identity(&state, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };
    match state
        .gateway
        .update_own_asset(&identity, &path.asset_id)
        .await
    {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Err(err) => access_error(err),
    }
}

/// 列出根资产；realm 缺省回落到调用方认证 realm
pub async fn list_root_assets(
    State(state): State<AppState>,
    Query(query): Query<RootQuery>,
    headers: HeaderMap,
) -> Response {
    let identity = match require_identity(&state, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };
    match state
        .gateway
        .list_root_assets(&identity, query.realm.as_deref())
        .await
    {
        Ok(items) => {
            let data: Vec<AssetDto> = items.into_iter().map(asset_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => access_error(err),
    }
}

/// 列出子资产
pub async fn list_children(
    State(state): State<AppState>,
    Path(path): Path<AssetPath>,
    headers: HeaderMap,
) -> Response {
    let identity = match require_identity(&state, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };
    match state.gateway.list_children(&identity, &path.asset_id).await {
        Ok(items) => {
            let data: Vec<AssetDto> = items.into_iter().map(asset_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => access_error(err),
    }
}

/// 获取资产详情
pub async fn get_asset(
    State(state): State<AppState>,
    Path(path): Path<AssetPath>,
    headers: HeaderMap,
) -> Response {
    let identity = match require_identity(&state, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };
    match state.gateway.get(&identity, &path.asset_id).await {
        Ok(asset) => {
            (StatusCode::OK, Json(ApiResponse::success(asset_to_dto(asset)))).into_response()
        }
        Err(err) => access_error(err),
    }
}

/// 创建资产
pub async fn create_asset(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateAssetRequest>,
) -> Response {
    let identity = match require_identity(&state, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };
    let name = match normalize_required(req.name, "name") {
        Ok(name) => name,
        Err(response) => return response,
    };
    let asset_type = match normalize_required(req.asset_type, "assetType") {
        Ok(asset_type) => asset_type,
        Err(response) => return response,
    };
    let realm = match normalize_required(req.realm, "realm") {
        Ok(realm) => realm,
        Err(response) => return response,
    };
    let asset_id = match normalize_client_asset_id(req.asset_id) {
        Ok(asset_id) => asset_id,
        Err(response) => return response,
    };
    let draft = AssetDraft {
        asset_id,
        realm,
        parent_id: req.parent_id,
        name,
        asset_type,
        attributes: req.attributes.into_iter().map(attribute_from_dto).collect(),
    };
    match state.gateway.create(&identity, draft).await {
        Ok(asset) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(asset_to_dto(asset))),
        )
            .into_response(),
        Err(err) => access_error(err),
    }
}

/// 更新资产（补丁不含资产类型：类型创建后不可变）
pub async fn update_asset(
    State(state): State<AppState>,
    Path(path): Path<AssetPath>,
    headers: HeaderMap,
    Json(req): Json<UpdateAssetRequest>,
) -> Response {
    let identity = match require_identity(&state, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };
    let name = match normalize_optional(req.name, "name") {
        Ok(name) => name,
        Err(response) => return response,
    };
    let realm = match normalize_optional(req.realm, "realm") {
        Ok(realm) => realm,
        Err(response) => return response,
    };
    let patch = AssetPatch {
        realm,
        // 三态：缺省保持原父节点，显式 null 移到根层级
        parent_id: req.parent_id,
        name,
        attributes: req
            .attributes
            .map(|attributes| attributes.into_iter().map(attribute_from_dto).collect()),
    };
    match state.gateway.update(&identity, &path.asset_id, patch).await {
        Ok(asset) => {
            (StatusCode::OK, Json(ApiResponse::success(asset_to_dto(asset)))).into_response()
        }
        Err(err) => access_error(err),
    }
}

/// 删除资产（目标缺失视作已删除，幂等返回成功）
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(path): Path<AssetPath>,
    headers: HeaderMap,
) -> Response {
    let identity = match require_identity(&state, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };
    match state.gateway.delete(&identity, &path.asset_id).await {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Err(err) => access_error(err),
    }
}
