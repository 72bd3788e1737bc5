//! 编解码与哈希工具（不含任何链知识）

pub mod base32;
pub mod base58;
pub mod cashaddr;
pub mod hash;
pub mod segwit;
