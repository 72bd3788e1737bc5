//! Sia 地址验证
//!
//! 76 个 hex 字符 = 32 字节 unlock hash + 6 字节校验和，
//! 校验和为 BLAKE2b-256(unlock hash) 的前 6 字节。

use crate::domain::types::Address;
use crate::utils::hash;
use crate::validators::AddressValidator;

const ADDRESS_LEN: usize = 76;
const UNLOCK_HASH_LEN: usize = 32;
const CHECKSUM_LEN: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct SiaValidator;

impl SiaValidator {
    pub fn new() -> Self {
        Self
    }

    fn verify(address: &str) -> bool {
        if address.len() != ADDRESS_LEN {
            return false;
        }
        let Ok(decoded) = hex::decode(address) else {
            return false;
        };

        let (unlock_hash, checksum) = decoded.split_at(UNLOCK_HASH_LEN);
        match hash::blake2b_var(unlock_hash, 32) {
            Some(digest) => digest[..CHECKSUM_LEN] == *checksum,
            None => false,
        }
    }
}

impl AddressValidator for SiaValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        Self::verify(address.address())
    }
}
