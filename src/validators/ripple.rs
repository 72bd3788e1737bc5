//! Ripple (XRP) 地址验证
//!
//! 经典地址：Ripple 字母表 Base58Check，版本字节 0x00 + 20 字节账户 ID。
//! memo 即 destination tag，必须是 u32 范围内的十进制整数。

use crate::domain::types::Address;
use crate::utils::base58;
use crate::validators::{memo_accepted, AddressValidator};

const ACCOUNT_VERSION: u8 = 0x00;
const PAYLOAD_LEN: usize = 21;

#[derive(Debug, Clone, Default)]
pub struct RippleValidator;

impl RippleValidator {
    pub fn new() -> Self {
        Self
    }

    fn is_valid_classic(address: &str) -> bool {
        if !address.starts_with('r') {
            return false;
        }
        match base58::decode_check_ripple(address) {
            Some(payload) => payload.len() == PAYLOAD_LEN && payload[0] == ACCOUNT_VERSION,
            None => false,
        }
    }
}

impl AddressValidator for RippleValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        Self::is_valid_classic(address.address()) && memo_accepted(self, address)
    }

    fn is_valid_memo(&self, memo: &str) -> bool {
        !memo.is_empty() && memo.chars().all(|c| c.is_ascii_digit()) && memo.parse::<u32>().is_ok()
    }
}
