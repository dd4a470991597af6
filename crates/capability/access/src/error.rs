//! 授权与网关错误类型。

use manager_storage::StorageError;

/// 网关对外的错误面。
///
/// 处理协作方抛出的运行期失败在网关边界被归类为 BadRequest，
/// 不会以未分类故障形式向外传播。
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// 目标实体不存在。
    #[error("not found")]
    NotFound,
    /// 已认证但对该 realm/资产无授权。
    #[error("forbidden")]
    Forbidden,
    /// 输入不合法、ID 长度违规、补丁产生不可达 realm 或存储层拒绝。
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 显式未实现的操作（必须大声失败，不允许静默无操作）。
    #[error("not implemented: {0}")]
    Unimplemented(&'static str),
    /// 存储协作方故障。
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
