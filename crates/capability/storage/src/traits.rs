//! 存储接口 Trait 定义
//!
//! 定义资产存储协作方的异步接口：
//! - AssetStore：资产查询、upsert、删除与受保护关联查询
//!
//! 设计原则：
//! - 接口不含授权逻辑，realm 过滤条件由调用方显式传入
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use async_trait::async_trait;
use domain::{AssetRecord, ProtectedAssetInfo};

/// 资产存储接口
///
/// 网关消费的外部协作方契约（禁止在 handler 中绕过网关直连存储）。
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// 按 ID 查找资产
    async fn find(&self, asset_id: &str) -> Result<Option<AssetRecord>, StorageError>;

    /// 列出指定 realm 的根资产（无父节点）
    async fn find_root(&self, realm: &str) -> Result<Vec<AssetRecord>, StorageError>;

    /// 列出指定父资产的所有子资产（跨 realm）
    async fn find_children(&self, parent_id: &str) -> Result<Vec<AssetRecord>, StorageError>;

    /// 列出指定父资产在指定 realm 内的子资产
    async fn find_children_in_realm(
        &self,
        parent_id: &str,
        realm: &str,
    ) -> Result<Vec<AssetRecord>, StorageError>;

    /// 列出受限用户的受保护资产关联
    async fn find_protected_of_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ProtectedAssetInfo>, StorageError>;

    /// 判断受限用户是否与指定资产存在受保护关联
    async fn find_protected_of_user_contains(
        &self,
        user_id: &str,
        asset_id: &str,
    ) -> Result<bool, StorageError>;

    /// upsert 资产，返回持久化后的记录
    async fn merge(&self, record: AssetRecord) -> Result<AssetRecord, StorageError>;

    /// 删除资产；false 表示存储层拒绝（如引用约束）
    async fn delete(&self, asset_id: &str) -> Result<bool, StorageError>;
}
