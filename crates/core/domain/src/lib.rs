pub mod asset;

pub use asset::{
    ASSET_ID_MIN_LENGTH, AssetRecord, Attribute, AttributeEvent, AttributeRef, AttributeState,
    ProtectedAssetInfo,
};

/// 身份能力级别：封闭枚举，杜绝"既是超级用户又是受限用户"的非法组合。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// 超级用户：跨 realm 完全访问。
    SuperUser,
    /// 受限用户：仅可访问显式关联的受保护资产。
    Restricted,
    /// 普通用户：仅限认证 realm 内访问。
    Standard,
}

/// 身份上下文：每个请求/连接一份的执行上下文。
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub username: String,
    /// 认证所针对的 realm（租户边界）。
    pub realm: String,
    pub level: AccessLevel,
}

impl Identity {
    /// 构造显式身份与能力级别的身份上下文。
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        realm: impl Into<String>,
        level: AccessLevel,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            realm: realm.into(),
            level,
        }
    }

    pub fn is_super_user(&self) -> bool {
        self.level == AccessLevel::SuperUser
    }

    pub fn is_restricted(&self) -> bool {
        self.level == AccessLevel::Restricted
    }
}

impl Default for Identity {
    /// 空上下文（仅用于测试或占位）。
    fn default() -> Self {
        Self {
            user_id: "".to_string(),
            username: "".to_string(),
            realm: "".to_string(),
            level: AccessLevel::Standard,
        }
    }
}
