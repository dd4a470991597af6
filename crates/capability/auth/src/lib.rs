//! 认证能力：access token 校验与身份上下文提取。
//!
//! token 的签发归外部身份目录；本 crate 只做校验一侧：解码 JWT，
//! 把 claims 映射为领域 `Identity`。签发函数保留给测试与本地演示。

mod jwt;

pub use jwt::JwtManager;

/// 认证相关错误。
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token expired")]
    TokenExpired,
    #[error("token invalid")]
    TokenInvalid,
    #[error("internal error: {0}")]
    Internal(String),
}
