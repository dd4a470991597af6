//! 访问决策引擎
//!
//! 纯函数决策：给定身份上下文与目标 realm/资产，返回允许/拒绝。
//! 不做任何 I/O，不查存储；资产当前 realm 由调用方在前置查找中提供，
//! 避免单次逻辑操作内的 check/use realm 漂移（更新路径的二次检查见
//! gateway）。
//!
//! 超级用户对所有检查短路为允许；受限用户的单资产读写一律拒绝，
//! 属性写入需要调用方提供受保护关联事实。

use domain::Identity;

/// 是否允许列出"自己的资产"。
///
/// 仅受限用户走该列表路径；超级用户与普通用户有各自的列表入口。
pub fn can_list_own_assets(identity: &Identity) -> bool {
    identity.is_restricted()
}

/// 是否可访问目标 realm。
///
/// 超级用户恒真；其余身份要求认证 realm 与目标一致。
/// 受限用户还需目标资产在其受保护集合内，该事实由调用方补充检查。
pub fn can_access_realm(identity: &Identity, target_realm: &str) -> bool {
    identity.is_super_user() || identity.realm == target_realm
}

/// 是否允许读取任意单个资产。
///
/// 受限用户没有单资产读取路径（只有受保护列表），一律拒绝。
pub fn can_read_asset(identity: &Identity, asset_realm: &str) -> bool {
    if identity.is_restricted() {
        return false;
    }
    can_access_realm(identity, asset_realm)
}

/// 是否允许写入（创建/更新/删除）单个资产。
pub fn can_write_asset(identity: &Identity, asset_realm: &str) -> bool {
    if identity.is_restricted() {
        return false;
    }
    can_access_realm(identity, asset_realm)
}

/// 是否允许写入资产属性。
///
/// `has_protected_link` 为调用方从存储查得的受保护关联事实，
/// 本函数保持纯函数性质。
pub fn can_write_attribute(
    identity: &Identity,
    asset_realm: &str,
    has_protected_link: bool,
) -> bool {
    if !can_access_realm(identity, asset_realm) {
        return false;
    }
    if identity.is_restricted() {
        return has_protected_link;
    }
    true
}

/// 解析根列表查询的目标 realm：空/缺省回落到调用方自己的认证 realm。
pub fn resolve_target_realm<'a>(identity: &'a Identity, realm: Option<&'a str>) -> &'a str {
    match realm {
        Some(realm) if !realm.is_empty() => realm,
        _ => identity.realm.as_str(),
    }
}
