//! Stellar (XLM) 地址验证
//!
//! StrKey 账户地址（G 开头）：Base32(版本字节 0x30 + 32 字节公钥 + CRC16-XModem 小端)。
//! memo 为文本 memo，UTF-8 编码后不超过 28 字节。

use crate::domain::types::Address;
use crate::utils::{base32, hash};
use crate::validators::{memo_accepted, AddressValidator};

const ADDRESS_LEN: usize = 56;
const DECODED_LEN: usize = 35;
/// 6 << 3，对应字符 'G'
const ACCOUNT_ID_VERSION: u8 = 6 << 3;
const MEMO_TEXT_MAX_BYTES: usize = 28;

#[derive(Debug, Clone, Default)]
pub struct StellarValidator;

impl StellarValidator {
    pub fn new() -> Self {
        Self
    }

    fn verify_checksum(address: &str) -> bool {
        if address.len() != ADDRESS_LEN {
            return false;
        }
        let Some(decoded) = base32::decode_rfc4648(address) else {
            return false;
        };
        if decoded.len() != DECODED_LEN || decoded[0] != ACCOUNT_ID_VERSION {
            return false;
        }

        let (payload, checksum) = decoded.split_at(DECODED_LEN - 2);
        hash::crc16_xmodem(payload).to_le_bytes() == checksum
    }
}

impl AddressValidator for StellarValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        Self::verify_checksum(address.address()) && memo_accepted(self, address)
    }

    fn is_valid_memo(&self, memo: &str) -> bool {
        memo.len() <= MEMO_TEXT_MAX_BYTES
    }
}
