use serde_json::Value;

/// 客户端自带资产 ID 的最小长度（防止过短、易猜测的标识符）。
pub const ASSET_ID_MIN_LENGTH: usize = 22;

/// 资产的单个属性。
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Value,
}

/// 资产记录：租户层级树中的一个节点。
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub asset_id: String,
    /// 所属 realm；更新时允许变更，但需双重授权检查。
    pub realm: String,
    /// 父资产引用；None 表示根资产。
    pub parent_id: Option<String>,
    pub name: String,
    /// 资产类型：创建后不可变，更新路径必须保留原值。
    pub asset_type: String,
    pub attributes: Vec<Attribute>,
}

impl AssetRecord {
    /// 按名称查找属性。
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

/// 属性引用：`(entity_id, attribute_name)` 对，订阅与更新事件的最小单元。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeRef {
    pub entity_id: String,
    pub attribute_name: String,
}

impl AttributeRef {
    pub fn new(entity_id: impl Into<String>, attribute_name: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            attribute_name: attribute_name.into(),
        }
    }
}

/// 属性状态：一次属性写入的目标引用与新值。
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeState {
    pub attribute_ref: AttributeRef,
    /// None 表示清空属性值。
    pub value: Option<Value>,
}

impl AttributeState {
    pub fn new(attribute_ref: AttributeRef, value: Option<Value>) -> Self {
        Self {
            attribute_ref,
            value,
        }
    }
}

/// 属性变更事件：交给处理协作方的载体。
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeEvent {
    pub state: AttributeState,
    pub timestamp_ms: i64,
}

impl AttributeEvent {
    pub fn new(state: AttributeState, timestamp_ms: i64) -> Self {
        Self {
            state,
            timestamp_ms,
        }
    }
}

/// 受保护资产关联：受限用户与单个资产之间的授权记录。
///
/// `realm` 由存储侧在查询时与资产当前 realm 对齐；与用户当前认证
/// realm 不一致的关联在列表结果中被静默排除（记录审计日志，不报错）。
#[derive(Debug, Clone, PartialEq)]
pub struct ProtectedAssetInfo {
    pub user_id: String,
    pub asset_id: String,
    pub realm: String,
    pub name: String,
}
