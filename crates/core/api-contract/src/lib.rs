//! 稳定的 DTO 与 API 响应契约。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 属性 DTO（名称 + JSON 值）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDto {
    pub name: String,
    pub value: Value,
}

/// 资产创建请求体。
///
/// `asset_id` 可选：客户端可自带标识符（长度下限由网关校验），
/// 缺省时由服务端生成。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    pub asset_id: Option<String>,
    pub realm: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub asset_type: String,
    #[serde(default)]
    pub attributes: Vec<AttributeDto>,
}

/// 资产更新请求体。
///
/// 不含 `asset_type`：资产类型创建后不可变，更新路径不接受该字段。
/// `parentId` 区分缺省与显式 null：字段缺省保持原父节点，显式
/// `"parentId": null` 把资产移到根层级。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetRequest {
    pub realm: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub parent_id: Option<Option<String>>,
    pub name: Option<String>,
    pub attributes: Option<Vec<AttributeDto>>,
}

/// 把字段出现（含显式 null）反序列化为 Some，缺省走 default = None。
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// 资产返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDto {
    pub asset_id: String,
    pub realm: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub asset_type: String,
    pub attributes: Vec<AttributeDto>,
}

/// 受保护资产返回结构（受限用户专属列表）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedAssetDto {
    pub asset_id: String,
    pub realm: String,
    pub name: String,
}

/// 属性写入请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeStateRequest {
    pub entity_id: String,
    pub attribute_name: String,
    pub value: Option<Value>,
}
