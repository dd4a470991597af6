//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：auth_error, internal_auth_error, access_error
//! - DTO 转换：asset_to_dto, protected_to_dto, draft_from_request
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - HTTP 状态码与网关错误面一一对应：
//!   NotFound→404, Forbidden→403, BadRequest→400,
//!   Unimplemented→501, Storage→500

use api_contract::{ApiResponse, AssetDto, AttributeDto, ProtectedAssetDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{AssetRecord, Attribute, ProtectedAssetInfo};
use manager_access::AccessError;
use manager_auth::AuthError;

/// 认证错误响应
pub fn auth_error(status: StatusCode) -> Response {
    (
        status,
        Json(ApiResponse::<()>::error(
            "AUTH.UNAUTHORIZED",
            "unauthorized",
        )),
    )
        .into_response()
}

/// 认证内部错误响应
pub fn internal_auth_error(err: AuthError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 网关错误面到 HTTP 响应的映射
pub fn access_error(err: AccessError) -> Response {
    match err {
        AccessError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
        )
            .into_response(),
        AccessError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error("AUTH.FORBIDDEN", "forbidden")),
        )
            .into_response(),
        AccessError::BadRequest(message) => bad_request_error(message),
        AccessError::Unimplemented(operation) => (
            StatusCode::NOT_IMPLEMENTED,
            Json(ApiResponse::<()>::error(
                "OP.UNSUPPORTED",
                format!("not implemented: {operation}"),
            )),
        )
            .into_response(),
        AccessError::Storage(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error("INTERNAL.ERROR", err.to_string())),
        )
            .into_response(),
    }
}

/// AssetRecord 转 AssetDto
pub fn asset_to_dto(record: AssetRecord) -> AssetDto {
    AssetDto {
        asset_id: record.asset_id,
        realm: record.realm,
        parent_id: record.parent_id,
        name: record.name,
        asset_type: record.asset_type,
        attributes: record.attributes.into_iter().map(attribute_to_dto).collect(),
    }
}

/// ProtectedAssetInfo 转 ProtectedAssetDto
pub fn protected_to_dto(info: ProtectedAssetInfo) -> ProtectedAssetDto {
    ProtectedAssetDto {
        asset_id: info.asset_id,
        realm: info.realm,
        name: info.name,
    }
}

/// Attribute 转 AttributeDto
pub fn attribute_to_dto(attribute: Attribute) -> AttributeDto {
    AttributeDto {
        name: attribute.name,
        value: attribute.value,
    }
}

/// AttributeDto 转 Attribute
pub fn attribute_from_dto(dto: AttributeDto) -> Attribute {
    Attribute {
        name: dto.name,
        value: dto.value,
    }
}
