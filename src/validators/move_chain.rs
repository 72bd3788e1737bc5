//! Move 系地址验证（Aptos、Sui 共享）
//!
//! 格式：`0x` + 64 个 hex 字符（32 字节账户地址）

use crate::domain::types::Address;
use crate::validators::AddressValidator;

const HEX_LEN: usize = 64;

#[derive(Debug, Clone, Default)]
pub struct MoveValidator;

impl MoveValidator {
    pub fn new() -> Self {
        Self
    }
}

impl AddressValidator for MoveValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        match address.address().strip_prefix("0x") {
            Some(hex_part) => hex_part.len() == HEX_LEN && hex::decode(hex_part).is_ok(),
            None => false,
        }
    }
}
