//! 内存存储实现
//!
//! 仅用于本地演示和测试。

mod asset;

pub use asset::InMemoryAssetStore;
