//! # Manager Storage 模块
//!
//! 本模块提供资产存储协作方的统一抽象层。
//!
//! ## 架构设计
//!
//! 该模块采用分层架构，遵循以下原则：
//!
//! 1. **接口抽象层** (`traits.rs`)：定义资产存储的异步 Trait 接口
//! 2. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 3. **实现层**：
//!    - `in_memory/`：内存存储实现（用于测试和本地演示）
//!
//! ## 核心特性
//!
//! - **窄接口**：持久化本体是外部协作方，这里只定义网关消费的契约
//!   （find / find_root / find_children / merge / delete / 受保护关联查询）
//! - **无授权逻辑**：存储层不做访问决策，realm 过滤参数由网关显式传入
//! - **异步支持**：基于 async-trait，支持动态分发
//!
//! ## 设计约束
//!
//! - 并发写入同一资产时依赖存储后端自身的一致性保证（last-write-wins），
//!   本层不做乐观锁
//! - `merge` 为 upsert 语义，返回持久化后的记录
//! - `delete` 返回 false 表示存储层拒绝（如引用约束），由调用方归类错误

pub mod error;
pub mod in_memory;
pub mod traits;

pub use error::*;
pub use in_memory::InMemoryAssetStore;
pub use traits::*;
