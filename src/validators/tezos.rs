//! Tezos 地址验证
//!
//! Base58Check，3 字节前缀 + 20 字节公钥哈希：
//! tz1 (ed25519)、tz2 (secp256k1)、tz3 (p256)、KT1 (合约)

use crate::domain::types::Address;
use crate::utils::base58;
use crate::validators::AddressValidator;

const PAYLOAD_LEN: usize = 23;

const PREFIXES: [[u8; 3]; 4] = [
    [6, 161, 159], // tz1
    [6, 161, 161], // tz2
    [6, 161, 164], // tz3
    [2, 90, 121],  // KT1
];

#[derive(Debug, Clone, Default)]
pub struct TezosValidator;

impl TezosValidator {
    pub fn new() -> Self {
        Self
    }
}

impl AddressValidator for TezosValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        let Some(payload) = base58::decode_check(address.address()) else {
            return false;
        };
        payload.len() == PAYLOAD_LEN && PREFIXES.iter().any(|prefix| payload.starts_with(prefix))
    }
}
