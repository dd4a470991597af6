//! 追踪、请求 ID 生成与审计计数。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 审计指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditSnapshot {
    pub forbidden_denials: u64,
    pub protected_links_skipped: u64,
    pub attribute_events_processed: u64,
    pub attribute_events_rejected: u64,
    pub assets_created: u64,
    pub assets_deleted: u64,
}

/// 审计指标：授权拒绝与资产变更的进程级计数。
pub struct AuditMetrics {
    forbidden_denials: AtomicU64,
    protected_links_skipped: AtomicU64,
    attribute_events_processed: AtomicU64,
    attribute_events_rejected: AtomicU64,
    assets_created: AtomicU64,
    assets_deleted: AtomicU64,
}

impl AuditMetrics {
    pub fn new() -> Self {
        Self {
            forbidden_denials: AtomicU64::new(0),
            protected_links_skipped: AtomicU64::new(0),
            attribute_events_processed: AtomicU64::new(0),
            attribute_events_rejected: AtomicU64::new(0),
            assets_created: AtomicU64::new(0),
            assets_deleted: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> AuditSnapshot {
        AuditSnapshot {
            forbidden_denials: self.forbidden_denials.load(Ordering::Relaxed),
            protected_links_skipped: self.protected_links_skipped.load(Ordering::Relaxed),
            attribute_events_processed: self.attribute_events_processed.load(Ordering::Relaxed),
            attribute_events_rejected: self.attribute_events_rejected.load(Ordering::Relaxed),
            assets_created: self.assets_created.load(Ordering::Relaxed),
            assets_deleted: self.assets_deleted.load(Ordering::Relaxed),
        }
    }
}

impl Default for AuditMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<AuditMetrics> = OnceLock::new();

/// 获取全局审计指标实例。
pub fn metrics() -> &'static AuditMetrics {
    METRICS.get_or_init(AuditMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录单资产操作被拒绝次数。
pub fn record_forbidden_denial() {
    metrics().forbidden_denials.fetch_add(1, Ordering::Relaxed);
}

/// 记录因 realm 漂移被排除的受保护关联次数。
pub fn record_protected_link_skipped() {
    metrics()
        .protected_links_skipped
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录属性事件成功转交处理次数。
pub fn record_attribute_event_processed() {
    metrics()
        .attribute_events_processed
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录属性事件被处理方拒绝次数。
pub fn record_attribute_event_rejected() {
    metrics()
        .attribute_events_rejected
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录资产创建次数。
pub fn record_asset_created() {
    metrics().assets_created.fetch_add(1, Ordering::Relaxed);
}

/// 记录资产删除次数。
pub fn record_asset_deleted() {
    metrics().assets_deleted.fetch_add(1, Ordering::Relaxed);
}
