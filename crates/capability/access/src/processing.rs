//! 属性事件处理协作方契约。
//!
//! 属性写入在授权通过后转交处理方（规则引擎/事件管线，外部实现）。
//! 重试与顺序由处理方自理，网关不做重试。

use async_trait::async_trait;
use domain::AttributeEvent;

/// 处理协作方错误。
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("processing rejected: {0}")]
    Rejected(String),
    #[error("processing failed: {0}")]
    Failed(String),
}

/// 属性事件处理接口。
#[async_trait]
pub trait AttributeProcessor: Send + Sync {
    /// 处理一次客户端属性写入事件。
    async fn process_client_update(&self, event: AttributeEvent) -> Result<(), ProcessingError>;
}

/// 占位处理器（用于接线与测试）。
#[derive(Debug, Default)]
pub struct NoopProcessor;

#[async_trait]
impl AttributeProcessor for NoopProcessor {
    async fn process_client_update(&self, _event: AttributeEvent) -> Result<(), ProcessingError> {
        Ok(())
    }
}
