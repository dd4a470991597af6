//! 资产请求字段验证
//!
//! 在 handler 边界做字段级验证，网关只处理授权与存储语义：
//! - normalize_required：必填字段（name/assetType/realm），去空格且非空
//! - normalize_optional：补丁中的可选字段，提供时去空格且非空
//! - normalize_client_asset_id：客户端自带的资产 ID，去空格并做
//!   字符数下限检查（服务端生成的 ID 不经过此路径）
//!
//! 验证失败统一返回 bad_request_error 响应。

use crate::utils::response::bad_request_error;
use axum::response::Response;
use domain::ASSET_ID_MIN_LENGTH;

/// 验证必填字段，去除空格并检查非空
pub fn normalize_required(value: String, field: &str) -> Result<String, Response> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(bad_request_error(format!("{field} required")));
    }
    Ok(trimmed.to_string())
}

/// 验证可选字段，如果提供则去除空格并检查非空
pub fn normalize_optional(value: Option<String>, field: &str) -> Result<Option<String>, Response> {
    match value {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(bad_request_error(format!("{field} required")));
            }
            Ok(Some(trimmed.to_string()))
        }
        None => Ok(None),
    }
}

/// 验证客户端自带的资产 ID：去空格并检查字符数下限
///
/// 网关对持久化前的 ID 有同样的下限检查，这里提前拒绝可以让
/// 格式问题不进入授权流程。长度按字符计，不按字节计。
pub fn normalize_client_asset_id(value: Option<String>) -> Result<Option<String>, Response> {
    match value {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.chars().count() < ASSET_ID_MIN_LENGTH {
                return Err(bad_request_error(format!(
                    "assetId must be at least {ASSET_ID_MIN_LENGTH} characters"
                )));
            }
            Ok(Some(trimmed.to_string()))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_asset_id_counts_characters_not_bytes() {
        // 22 个多字节字符：字节数远超 22，字符数恰好达标
        let id = "资".repeat(ASSET_ID_MIN_LENGTH);
        assert!(id.len() > ASSET_ID_MIN_LENGTH);
        let normalized = normalize_client_asset_id(Some(id.clone())).expect("valid id");
        assert_eq!(normalized, Some(id));

        let short = "资".repeat(ASSET_ID_MIN_LENGTH - 1);
        assert!(normalize_client_asset_id(Some(short)).is_err());
    }

    #[test]
    fn client_asset_id_absent_passes_through() {
        assert_eq!(normalize_client_asset_id(None).expect("none"), None);
    }
}
