//! 授权能力：访问决策引擎与资产网关。
//!
//! 分为三层：
//! - `decision`：纯函数决策引擎，无 I/O，无共享状态
//! - `gateway`：按操作编排"决策 → 存储调用 → 错误归类"
//! - `processing`：属性事件处理协作方契约
//!
//! 错误面是封闭的四元组（NotFound / Forbidden / BadRequest /
//! Unimplemented），列表类操作的拒绝以空集合表达，不进入错误面。

pub mod decision;
pub mod error;
pub mod gateway;
pub mod processing;

pub use decision::*;
pub use error::AccessError;
pub use gateway::AssetGateway;
pub use processing::{AttributeProcessor, NoopProcessor, ProcessingError};
