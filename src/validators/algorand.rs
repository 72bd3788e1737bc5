//! Algorand 地址验证
//!
//! 58 个 Base32 字符 = 32 字节公钥 + 4 字节校验和，
//! 校验和为 SHA-512/256(公钥) 的最后 4 字节。

use crate::domain::types::Address;
use crate::utils::{base32, hash};
use crate::validators::AddressValidator;

const ADDRESS_LEN: usize = 58;
const PUBKEY_LEN: usize = 32;
const CHECKSUM_LEN: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct AlgorandValidator;

impl AlgorandValidator {
    pub fn new() -> Self {
        Self
    }
}

impl AddressValidator for AlgorandValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        let raw = address.address();
        if raw.len() != ADDRESS_LEN {
            return false;
        }
        let Some(decoded) = base32::decode_rfc4648(raw) else {
            return false;
        };
        if decoded.len() != PUBKEY_LEN + CHECKSUM_LEN {
            return false;
        }

        let (pubkey, checksum) = decoded.split_at(PUBKEY_LEN);
        let digest = hash::sha512_256(pubkey);
        digest[digest.len() - CHECKSUM_LEN..] == *checksum
    }
}
