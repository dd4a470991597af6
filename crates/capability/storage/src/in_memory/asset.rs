//! 资产内存存储实现
//!
//! 仅用于本地演示和测试。
//!
//! 功能：
//! - 资产 upsert / 查找 / 删除
//! - 根资产与子资产查询（含 realm 过滤）
//! - 受保护资产关联维护与查询
//!
//! 受保护关联查询在读取时与资产当前状态对齐（realm、名称取资产的
//! 当前值），与生产存储的关联表 join 语义一致。
//! 删除时模拟引用约束：仍有子资产的节点拒绝删除（返回 false）。

use crate::error::StorageError;
use crate::traits::AssetStore;
use domain::{AssetRecord, ProtectedAssetInfo};
use std::collections::HashMap;
use std::sync::RwLock;

/// 资产内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
pub struct InMemoryAssetStore {
    assets: RwLock<HashMap<String, AssetRecord>>,
    /// (user_id, asset_id) 关联对。
    protected_links: RwLock<Vec<(String, String)>>,
}

impl InMemoryAssetStore {
    /// 创建空的资产存储
    pub fn new() -> Self {
        Self {
            assets: RwLock::new(HashMap::new()),
            protected_links: RwLock::new(Vec::new()),
        }
    }

    /// 建立受保护资产关联
    ///
    /// 测试与演示用：生产环境中关联由身份目录侧维护。
    pub fn link_protected(&self, user_id: &str, asset_id: &str) {
        if let Ok(mut links) = self.protected_links.write() {
            links.push((user_id.to_string(), asset_id.to_string()));
        }
    }
}

impl Default for InMemoryAssetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AssetStore for InMemoryAssetStore {
    /// 按 ID 查找资产
    async fn find(&self, asset_id: &str) -> Result<Option<AssetRecord>, StorageError> {
        let item = self
            .assets
            .read()
            .ok()
            .and_then(|map| map.get(asset_id).cloned());
        Ok(item)
    }

    /// 列出指定 realm 的根资产
    async fn find_root(&self, realm: &str) -> Result<Vec<AssetRecord>, StorageError> {
        let items = self
            .assets
            .read()
            .map(|map| {
                map.values()
                    .filter(|item| item.parent_id.is_none() && item.realm == realm)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(items)
    }

    /// 列出指定父资产的所有子资产
    async fn find_children(&self, parent_id: &str) -> Result<Vec<AssetRecord>, StorageError> {
        let items = self
            .assets
            .read()
            .map(|map| {
                map.values()
                    .filter(|item| item.parent_id.as_deref() == Some(parent_id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(items)
    }

    /// 列出指定父资产在指定 realm 内的子资产
    async fn find_children_in_realm(
        &self,
        parent_id: &str,
        realm: &str,
    ) -> Result<Vec<AssetRecord>, StorageError> {
        let items = self
            .assets
            .read()
            .map(|map| {
                map.values()
                    .filter(|item| {
                        item.parent_id.as_deref() == Some(parent_id) && item.realm == realm
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(items)
    }

    /// 列出受限用户的受保护资产关联（realm、名称取资产当前值）
    async fn find_protected_of_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ProtectedAssetInfo>, StorageError> {
        let links = self
            .protected_links
            .read()
            .map(|links| {
                links
                    .iter()
                    .filter(|(link_user, _)| link_user == user_id)
                    .map(|(_, asset_id)| asset_id.clone())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        let assets = self
            .assets
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        let items = links
            .into_iter()
            .filter_map(|asset_id| {
                assets.get(&asset_id).map(|asset| ProtectedAssetInfo {
                    user_id: user_id.to_string(),
                    asset_id,
                    realm: asset.realm.clone(),
                    name: asset.name.clone(),
                })
            })
            .collect();
        Ok(items)
    }

    /// 判断受限用户是否与指定资产存在受保护关联
    async fn find_protected_of_user_contains(
        &self,
        user_id: &str,
        asset_id: &str,
    ) -> Result<bool, StorageError> {
        let contains = self
            .protected_links
            .read()
            .map(|links| {
                links
                    .iter()
                    .any(|(link_user, link_asset)| link_user == user_id && link_asset == asset_id)
            })
            .unwrap_or(false);
        Ok(contains)
    }

    /// upsert 资产，返回持久化后的记录
    async fn merge(&self, record: AssetRecord) -> Result<AssetRecord, StorageError> {
        if record.asset_id.is_empty() {
            return Err(StorageError::new("asset_id required"));
        }
        let mut map = self
            .assets
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.insert(record.asset_id.clone(), record.clone());
        Ok(record)
    }

    /// 删除资产；仍有子资产的节点返回 false（引用约束）
    async fn delete(&self, asset_id: &str) -> Result<bool, StorageError> {
        let mut map = self
            .assets
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let has_children = map
            .values()
            .any(|item| item.parent_id.as_deref() == Some(asset_id));
        if has_children {
            return Ok(false);
        }
        map.remove(asset_id);
        Ok(true)
    }
}
