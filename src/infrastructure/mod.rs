//! 基础设施层
//!
//! 目前只有日志初始化

pub mod logging;

pub use logging::{init_default_logging, init_logging};
