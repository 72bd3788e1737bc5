//! Domain 模块
//!
//! 输入类型与链注册表

pub mod chain_registry;
pub mod types;

// 重新导出常用类型
pub use chain_registry::{ChainEntry, ChainRegistry, ChainValidator, SharedValidator};
pub use types::{Address, Chain, NetworkType};
