//! 连接会话能力：MQTT 风格连接的 realm 推导与订阅注册表。
//!
//! 每个传输层会话持有一个 `MqttConnection`：连接建立时从客户端
//! 标识推导 realm，认证后可刷新 access token，订阅表随订阅/退订
//! 变化，断开时整体丢弃（无需逐订阅清理顺序）。
//!
//! 注册表归属单个连接，禁止跨连接共享；计数器与两张订阅表放在同
//! 一把 Mutex 之下，"分配 ID + 插入"构成单一临界区，避免同连接
//! 上并发任务竞争同一个计数值。

use domain::AttributeRef;
use std::collections::HashMap;
use std::sync::Mutex;

/// 客户端标识中 realm 前缀与其余部分的分隔符。
pub const CLIENT_ID_SEPARATOR: char = ':';

/// 从客户端标识推导 realm。
///
/// 分隔符出现在正索引处时取前缀；分隔符缺失或位于索引 0（空前缀）
/// 时整个客户端标识即为 realm。索引 0 的情形是刻意为之：空 realm
/// 前缀回落到整串。
pub fn derive_realm(client_id: &str, separator: char) -> &str {
    match client_id.find(separator) {
        Some(index) if index > 0 => &client_id[..index],
        _ => client_id,
    }
}

/// 订阅表与计数器：单把锁下的读-改-写。
#[derive(Debug, Default)]
struct SubscriptionTables {
    asset_subscriptions: HashMap<String, u64>,
    attribute_subscriptions: HashMap<AttributeRef, u64>,
    /// 单调递增，从 0 起步，预自增分配，退订后不回收。
    subscription_counter: u64,
}

impl SubscriptionTables {
    fn allocate(&mut self) -> u64 {
        self.subscription_counter += 1;
        self.subscription_counter
    }
}

/// MQTT 风格连接：一个传输层会话一份。
pub struct MqttConnection {
    realm: String,
    client_id: String,
    username: String,
    /// 凭据原始字节（透传给身份目录，不在本层解析）。
    password: Vec<u8>,
    /// 认证成功后写入，连接存续期内可刷新。
    access_token: Mutex<Option<String>>,
    tables: Mutex<SubscriptionTables>,
}

impl MqttConnection {
    /// 以默认分隔符建立连接会话。
    pub fn new(client_id: impl Into<String>, username: impl Into<String>, password: Vec<u8>) -> Self {
        Self::with_separator(client_id, username, password, CLIENT_ID_SEPARATOR)
    }

    /// 以指定分隔符建立连接会话（分隔符来自运行配置）。
    pub fn with_separator(
        client_id: impl Into<String>,
        username: impl Into<String>,
        password: Vec<u8>,
        separator: char,
    ) -> Self {
        let client_id = client_id.into();
        let realm = derive_realm(&client_id, separator).to_string();
        Self {
            realm,
            client_id,
            username: username.into(),
            password,
            access_token: Mutex::new(None),
            tables: Mutex::new(SubscriptionTables::default()),
        }
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &[u8] {
        &self.password
    }

    /// 读取当前 access token。
    pub fn access_token(&self) -> Option<String> {
        self.lock_token().clone()
    }

    /// 刷新 access token（认证成功或续期时调用）。
    pub fn set_access_token(&self, token: Option<String>) {
        *self.lock_token() = token;
    }

    /// 分配下一个订阅 ID：预自增，连接生命周期内唯一且严格递增。
    pub fn next_subscription_id(&self) -> u64 {
        self.lock_tables().allocate()
    }

    /// 订阅资产，返回订阅 ID。
    ///
    /// 重复订阅返回既有 ID：订阅 ID 关联的是一个稳定订阅，而不是
    /// 一次订阅动作。
    pub fn subscribe_asset(&self, asset_id: &str) -> u64 {
        let mut tables = self.lock_tables();
        if let Some(id) = tables.asset_subscriptions.get(asset_id) {
            return *id;
        }
        let id = tables.allocate();
        tables.asset_subscriptions.insert(asset_id.to_string(), id);
        id
    }

    /// 订阅单个属性，返回订阅 ID（语义同 `subscribe_asset`）。
    pub fn subscribe_attribute(&self, attribute_ref: &AttributeRef) -> u64 {
        let mut tables = self.lock_tables();
        if let Some(id) = tables.attribute_subscriptions.get(attribute_ref) {
            return *id;
        }
        let id = tables.allocate();
        tables
            .attribute_subscriptions
            .insert(attribute_ref.clone(), id);
        id
    }

    /// 退订资产；目标不存在时无操作（幂等）。
    pub fn unsubscribe_asset(&self, asset_id: &str) {
        self.lock_tables().asset_subscriptions.remove(asset_id);
    }

    /// 退订属性；目标不存在时无操作（幂等）。
    pub fn unsubscribe_attribute(&self, attribute_ref: &AttributeRef) {
        self.lock_tables()
            .attribute_subscriptions
            .remove(attribute_ref);
    }

    /// 查询资产订阅 ID（用于推送关联）。
    pub fn asset_subscription(&self, asset_id: &str) -> Option<u64> {
        self.lock_tables().asset_subscriptions.get(asset_id).copied()
    }

    /// 查询属性订阅 ID（用于推送关联）。
    pub fn attribute_subscription(&self, attribute_ref: &AttributeRef) -> Option<u64> {
        self.lock_tables()
            .attribute_subscriptions
            .get(attribute_ref)
            .copied()
    }

    /// 当前订阅总数。
    pub fn subscription_count(&self) -> usize {
        let tables = self.lock_tables();
        tables.asset_subscriptions.len() + tables.attribute_subscriptions.len()
    }

    fn lock_tables(&self) -> std::sync::MutexGuard<'_, SubscriptionTables> {
        // 持锁代码不 panic；即便中毒也取回内部状态继续
        self.tables.lock().unwrap_or_else(|err| err.into_inner())
    }

    fn lock_token(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.access_token
            .lock()
            .unwrap_or_else(|err| err.into_inner())
    }
}
