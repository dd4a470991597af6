//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub jwt_secret: String,
    pub jwt_access_ttl_seconds: u64,
    /// MQTT 客户端标识中 realm 前缀的分隔符。
    pub client_id_separator: char,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("MANAGER_JWT_SECRET")
            .map_err(|_| ConfigError::Missing("MANAGER_JWT_SECRET".to_string()))?;
        let jwt_access_ttl_seconds = read_u64("MANAGER_JWT_ACCESS_TTL_SECONDS")?;
        let http_addr =
            env::var("MANAGER_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let client_id_separator = read_char_with_default("MANAGER_CLIENT_ID_SEPARATOR", ':')?;

        Ok(Self {
            http_addr,
            jwt_secret,
            jwt_access_ttl_seconds,
            client_id_separator,
        })
    }
}

/// 读取 u64 类型环境变量。
fn read_u64(key: &str) -> Result<u64, ConfigError> {
    let value = env::var(key).map_err(|_| ConfigError::Missing(key.to_string()))?;
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

/// 读取单字符环境变量（带默认值）。
fn read_char_with_default(key: &str, default: char) -> Result<char, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}
