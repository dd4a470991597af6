use crate::AuthError;
use domain::{AccessLevel, Identity};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

// 身份目录在 roles claim 中标注能力级别的角色名。
const ROLE_SUPER_USER: &str = "super-user";
const ROLE_RESTRICTED_USER: &str = "restricted-user";

#[derive(Debug, Serialize, Deserialize)]
/// JWT 内部 claims。
struct Claims {
    sub: String,
    preferred_username: String,
    realm: String,
    roles: Vec<String>,
    exp: usize,
}

/// JWT 校验与（测试用）签发。
pub struct JwtManager {
    secret: Vec<u8>,
    access_ttl_seconds: u64,
}

impl JwtManager {
    /// 创建 JWT 管理器。
    pub fn new(secret: String, access_ttl_seconds: u64) -> Self {
        Self {
            secret: secret.into_bytes(),
            access_ttl_seconds,
        }
    }

    /// 解析 access token 并映射为身份上下文。
    ///
    /// roles 同时携带超级用户与受限用户标记视为非法 token：能力
    /// 级别是封闭且互斥的。
    pub fn decode_access(&self, token: &str) -> Result<Identity, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let decoded = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .map_err(|err| match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::TokenInvalid,
        })?;
        let claims = decoded.claims;
        let level = access_level(&claims.roles)?;
        Ok(Identity::new(
            claims.sub,
            claims.preferred_username,
            claims.realm,
            level,
        ))
    }

    /// 为指定身份签发 access token（测试与本地演示用；生产环境由
    /// 身份目录签发）。
    pub fn issue_access(&self, identity: &Identity) -> Result<String, AuthError> {
        let exp = (now_epoch_seconds() + self.access_ttl_seconds) as usize;
        let roles = match identity.level {
            AccessLevel::SuperUser => vec![ROLE_SUPER_USER.to_string()],
            AccessLevel::Restricted => vec![ROLE_RESTRICTED_USER.to_string()],
            AccessLevel::Standard => vec![],
        };
        let claims = Claims {
            sub: identity.user_id.clone(),
            preferred_username: identity.username.clone(),
            realm: identity.realm.clone(),
            roles,
            exp,
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|err| AuthError::Internal(err.to_string()))
    }
}

/// 从 roles claim 推导能力级别；互斥标记同时出现视为非法。
fn access_level(roles: &[String]) -> Result<AccessLevel, AuthError> {
    let is_super = roles.iter().any(|role| role == ROLE_SUPER_USER);
    let is_restricted = roles.iter().any(|role| role == ROLE_RESTRICTED_USER);
    match (is_super, is_restricted) {
        (true, true) => Err(AuthError::TokenInvalid),
        (true, false) => Ok(AccessLevel::SuperUser),
        (false, true) => Ok(AccessLevel::Restricted),
        (false, false) => Ok(AccessLevel::Standard),
    }
}

fn now_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}
