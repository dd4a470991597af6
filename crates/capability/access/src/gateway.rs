//! 资产网关
//!
//! 每个公开操作遵循同一形状：身份检查 → 存储查找 → 决策检查 →
//! 存储变更 → 结果。所有涉及具体资产的拒绝路径都以 debug 级日志
//! 记录操作者用户名、资产 ID 与 realm，并计入审计计数（设计行为，
//! 非附带产物）。
//!
//! 列表类操作对受限/无权调用方返回空集合而不报错，避免泄露 realm
//! 是否存在；单资产操作（get/update/delete）返回显式 Forbidden /
//! NotFound，因为调用方本来就知道自己请求的 ID。

use crate::decision;
use crate::error::AccessError;
use crate::processing::AttributeProcessor;
use domain::{
    ASSET_ID_MIN_LENGTH, AssetRecord, Attribute, AttributeEvent, AttributeState, Identity,
    ProtectedAssetInfo,
};
use manager_storage::AssetStore;
use manager_telemetry::{
    record_asset_created, record_asset_deleted, record_attribute_event_processed,
    record_attribute_event_rejected, record_forbidden_denial, record_protected_link_skipped,
};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// 资产创建的输入表示。
///
/// `asset_id` 可由客户端自带（长度下限校验），缺省时服务端生成。
#[derive(Debug, Clone)]
pub struct AssetDraft {
    pub asset_id: Option<String>,
    pub realm: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub asset_type: String,
    pub attributes: Vec<Attribute>,
}

/// 资产更新补丁。
///
/// None 表示保持原值；补丁不含 `asset_type`，类型创建后不可变。
/// `parent_id` 是三态字段：外层 None 保持原父节点，`Some(None)`
/// 清除父节点（移到根层级），`Some(Some(id))` 换父节点。
#[derive(Debug, Clone, Default)]
pub struct AssetPatch {
    pub realm: Option<String>,
    pub parent_id: Option<Option<String>>,
    pub name: Option<String>,
    pub attributes: Option<Vec<Attribute>>,
}

/// 资产网关：编排一次逻辑操作的授权与存储往返。
pub struct AssetGateway {
    store: Arc<dyn AssetStore>,
    processor: Arc<dyn AttributeProcessor>,
}

impl AssetGateway {
    /// 创建网关实例。
    pub fn new(store: Arc<dyn AssetStore>, processor: Arc<dyn AttributeProcessor>) -> Self {
        Self { store, processor }
    }

    /// 列出调用方自己的受保护资产（仅受限用户）。
    ///
    /// 超级用户与普通用户在此路径得到空结果。关联 realm 与认证 realm
    /// 不一致的条目被静默排除并逐条记录（资产可能已被移入其他 realm）。
    pub async fn list_own_assets(
        &self,
        identity: &Identity,
    ) -> Result<Vec<ProtectedAssetInfo>, AccessError> {
        if !decision::can_list_own_assets(identity) {
            return Ok(Vec::new());
        }
        let links = self.store.find_protected_of_user(&identity.user_id).await?;
        let mut result = Vec::with_capacity(links.len());
        for link in links {
            if link.realm != identity.realm {
                warn!(
                    "user '{}' has protected asset outside of authenticated realm, skipping: {}",
                    identity.username, link.asset_id
                );
                record_protected_link_skipped();
                continue;
            }
            result.push(link);
        }
        Ok(result)
    }

    /// 列出指定 realm 的根资产。
    ///
    /// 空/缺省 realm 回落到调用方自己的认证 realm；无权或受限用户
    /// 得到空结果而非错误。
    pub async fn list_root_assets(
        &self,
        identity: &Identity,
        realm: Option<&str>,
    ) -> Result<Vec<AssetRecord>, AccessError> {
        let target_realm = decision::resolve_target_realm(identity, realm);
        if !decision::can_access_realm(identity, target_realm) || identity.is_restricted() {
            return Ok(Vec::new());
        }
        Ok(self.store.find_root(target_realm).await?)
    }

    /// 列出指定父资产的子资产。
    ///
    /// 受限用户得到空结果；超级用户跨 realm 可见全部子资产；
    /// 普通用户仅见认证 realm 内的子资产。
    pub async fn list_children(
        &self,
        identity: &Identity,
        parent_id: &str,
    ) -> Result<Vec<AssetRecord>, AccessError> {
        if identity.is_restricted() {
            return Ok(Vec::new());
        }
        let children = if identity.is_super_user() {
            self.store.find_children(parent_id).await?
        } else {
            self.store
                .find_children_in_realm(parent_id, &identity.realm)
                .await?
        };
        Ok(children)
    }

    /// 读取单个资产。
    pub async fn get(&self, identity: &Identity, asset_id: &str) -> Result<AssetRecord, AccessError> {
        if identity.is_restricted() {
            record_forbidden_denial();
            return Err(AccessError::Forbidden);
        }
        let asset = match self.store.find(asset_id).await? {
            Some(asset) => asset,
            None => return Err(AccessError::NotFound),
        };
        if !decision::can_read_asset(identity, &asset.realm) {
            debug!(
                "forbidden access for user '{}', can't retrieve asset '{}' of realm: {}",
                identity.username, asset_id, asset.realm
            );
            record_forbidden_denial();
            return Err(AccessError::Forbidden);
        }
        Ok(asset)
    }

    /// 更新单个资产。
    ///
    /// 旧 realm 与补丁合并后的新 realm 都必须对操作者可达：第二次
    /// 检查是强制的，恶意或有缺陷的补丁可能把资产移入不可达 realm。
    /// 合并时显式保留 `asset_type` 与标识字段。
    pub async fn update(
        &self,
        identity: &Identity,
        asset_id: &str,
        patch: AssetPatch,
    ) -> Result<AssetRecord, AccessError> {
        if identity.is_restricted() {
            record_forbidden_denial();
            return Err(AccessError::Forbidden);
        }
        let existing = match self.store.find(asset_id).await? {
            Some(asset) => asset,
            None => return Err(AccessError::NotFound),
        };
        // 旧 realm 必须可达
        if !decision::can_write_asset(identity, &existing.realm) {
            debug!(
                "forbidden access for user '{}', can't update asset '{}' of realm: {}",
                identity.username, asset_id, existing.realm
            );
            record_forbidden_denial();
            return Err(AccessError::Forbidden);
        }

        let updated = apply_patch(existing, patch);

        // 合并结果的 realm 必须可达
        if !decision::can_access_realm(identity, &updated.realm) {
            debug!(
                "forbidden access for user '{}', can't move asset '{}' into realm: {}",
                identity.username, asset_id, updated.realm
            );
            record_forbidden_denial();
            return Err(AccessError::Forbidden);
        }

        Ok(self.store.merge(updated).await?)
    }

    /// 写入单个资产属性。
    ///
    /// 受限用户需要与目标资产存在受保护关联；授权通过后事件转交
    /// 处理协作方，处理方的失败在此边界归类为 BadRequest。
    pub async fn update_attribute(
        &self,
        identity: &Identity,
        state: AttributeState,
    ) -> Result<(), AccessError> {
        let entity_id = state.attribute_ref.entity_id.clone();
        let asset = match self.store.find(&entity_id).await? {
            Some(asset) => asset,
            None => return Err(AccessError::NotFound),
        };
        let has_protected_link = if identity.is_restricted() {
            self.store
                .find_protected_of_user_contains(&identity.user_id, &asset.asset_id)
                .await?
        } else {
            false
        };
        if !decision::can_write_attribute(identity, &asset.realm, has_protected_link) {
            debug!(
                "forbidden access for user '{}', can't update attribute of asset '{}' of realm: {}",
                identity.username, entity_id, asset.realm
            );
            record_forbidden_denial();
            return Err(AccessError::Forbidden);
        }

        let event = AttributeEvent::new(state, now_epoch_ms());
        match self.processor.process_client_update(event).await {
            Ok(()) => {
                record_attribute_event_processed();
                Ok(())
            }
            Err(err) => {
                record_attribute_event_rejected();
                Err(AccessError::BadRequest(format!(
                    "error updating attribute: {err}"
                )))
            }
        }
    }

    /// 创建资产。
    ///
    /// 客户端自带 ID 时做最低限度的健全性检查（长度下限），缺省时
    /// 服务端生成 UUID；持久化走 merge（upsert 语义）。
    pub async fn create(
        &self,
        identity: &Identity,
        draft: AssetDraft,
    ) -> Result<AssetRecord, AccessError> {
        if identity.is_restricted() {
            record_forbidden_denial();
            return Err(AccessError::Forbidden);
        }
        if !decision::can_access_realm(identity, &draft.realm) {
            debug!(
                "forbidden access for user '{}', can't create asset in realm: {}",
                identity.username, draft.realm
            );
            record_forbidden_denial();
            return Err(AccessError::Forbidden);
        }

        let asset_id = match draft.asset_id {
            Some(asset_id) => {
                // 只能指望客户端给了全局唯一的 ID，这里做长度健全性检查
                // 长度按字符计，不按字节计
                if asset_id.chars().count() < ASSET_ID_MIN_LENGTH {
                    debug!("identifier value is too short, can't persist asset: {asset_id}");
                    return Err(AccessError::BadRequest(format!(
                        "asset id must be at least {ASSET_ID_MIN_LENGTH} characters"
                    )));
                }
                asset_id
            }
            None => Uuid::new_v4().simple().to_string(),
        };

        let record = AssetRecord {
            asset_id,
            realm: draft.realm,
            parent_id: draft.parent_id,
            name: draft.name,
            asset_type: draft.asset_type,
            attributes: draft.attributes,
        };
        let persisted = self.store.merge(record).await?;
        record_asset_created();
        Ok(persisted)
    }

    /// 删除资产。
    ///
    /// 目标不存在视作已删除（幂等，返回成功）；存储层拒绝（如引用
    /// 约束）归类为 BadRequest。
    pub async fn delete(&self, identity: &Identity, asset_id: &str) -> Result<(), AccessError> {
        if identity.is_restricted() {
            record_forbidden_denial();
            return Err(AccessError::Forbidden);
        }
        let asset = match self.store.find(asset_id).await? {
            Some(asset) => asset,
            None => return Ok(()),
        };
        if !decision::can_write_asset(identity, &asset.realm) {
            debug!(
                "forbidden access for user '{}', can't delete asset '{}' of realm: {}",
                identity.username, asset_id, asset.realm
            );
            record_forbidden_denial();
            return Err(AccessError::Forbidden);
        }
        if !self.store.delete(asset_id).await? {
            return Err(AccessError::BadRequest(
                "asset delete rejected by storage".to_string(),
            ));
        }
        record_asset_deleted();
        Ok(())
    }

    /// 受限用户更新自己的受保护资产。
    ///
    /// 上游刻意未定语义的操作：显式报错，禁止静默无操作。
    pub async fn update_own_asset(
        &self,
        _identity: &Identity,
        _asset_id: &str,
    ) -> Result<(), AccessError> {
        Err(AccessError::Unimplemented("update own asset"))
    }
}

/// 把补丁合并到既有记录：保留标识字段与不可变的 `asset_type`。
fn apply_patch(existing: AssetRecord, patch: AssetPatch) -> AssetRecord {
    AssetRecord {
        asset_id: existing.asset_id,
        realm: patch.realm.unwrap_or(existing.realm),
        parent_id: patch.parent_id.unwrap_or(existing.parent_id),
        name: patch.name.unwrap_or(existing.name),
        asset_type: existing.asset_type,
        attributes: patch.attributes.unwrap_or(existing.attributes),
    }
}

fn now_epoch_ms() -> i64 {
    let now = std::time::SystemTime::now();
    let duration = now
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    duration.as_millis() as i64
}
