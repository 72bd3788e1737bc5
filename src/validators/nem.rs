//! NEM (NIS1) 地址验证
//!
//! 可带 '-' 分组，忽略大小写。去掉分隔符后为 40 个 Base32 字符 = 25 字节：
//! 网络字节 0x68 ('N') + 20 字节 RIPEMD-160(Keccak-256(公钥)) + 4 字节校验和，
//! 校验和为 Keccak-256(前 21 字节) 的前 4 字节。

use crate::domain::types::Address;
use crate::utils::{base32, hash};
use crate::validators::AddressValidator;

const ADDRESS_LEN: usize = 40;
const DECODED_LEN: usize = 25;
const BODY_LEN: usize = 21;
const MAINNET_NETWORK: u8 = 0x68;

#[derive(Debug, Clone, Default)]
pub struct NemValidator;

impl NemValidator {
    pub fn new() -> Self {
        Self
    }

    fn verify(address: &str) -> bool {
        let normalized: String = address
            .chars()
            .filter(|&c| c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if normalized.len() != ADDRESS_LEN {
            return false;
        }

        let Some(decoded) = base32::decode_rfc4648(&normalized) else {
            return false;
        };
        if decoded.len() != DECODED_LEN || decoded[0] != MAINNET_NETWORK {
            return false;
        }

        let (body, checksum) = decoded.split_at(BODY_LEN);
        hash::keccak256(body)[..4] == *checksum
    }
}

impl AddressValidator for NemValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        Self::verify(address.address())
    }
}
