//! Tron 地址验证（Base58Check，版本字节 0x41，以 T 开头）

use crate::domain::types::Address;
use crate::utils::base58;
use crate::validators::AddressValidator;

const ADDRESS_VERSION: u8 = 0x41;
const PAYLOAD_LEN: usize = 21;

#[derive(Debug, Clone, Default)]
pub struct TronValidator;

impl TronValidator {
    pub fn new() -> Self {
        Self
    }
}

impl AddressValidator for TronValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        match base58::decode_check(address.address()) {
            Some(payload) => payload.len() == PAYLOAD_LEN && payload[0] == ADDRESS_VERSION,
            None => false,
        }
    }
}
