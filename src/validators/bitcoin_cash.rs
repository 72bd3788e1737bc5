//! Bitcoin Cash 地址验证
//!
//! 接受两种格式：
//! - CashAddr（`bitcoincash:` / `bchtest:` 前缀可省略）
//! - Legacy Base58Check（与 Bitcoin 相同的版本字节）

use crate::domain::types::{Address, NetworkType};
use crate::utils::cashaddr;
use crate::validators::{AddressValidator, BitcoinValidator};

const MAINNET_PREFIX: &str = "bitcoincash";
const TESTNET_PREFIX: &str = "bchtest";

const VERSION_P2PKH: u8 = 0x00;
const VERSION_P2SH: u8 = 0x08;
const HASH_LEN: usize = 20;

#[derive(Debug, Clone)]
pub struct BitcoinCashValidator {
    network: NetworkType,
    legacy: BitcoinValidator,
}

impl BitcoinCashValidator {
    pub fn new(network: NetworkType, legacy_address_types: &[u8]) -> Self {
        Self {
            network,
            legacy: BitcoinValidator::new(legacy_address_types),
        }
    }

    fn prefix(&self) -> &'static str {
        match self.network {
            NetworkType::MainNet => MAINNET_PREFIX,
            NetworkType::TestNet => TESTNET_PREFIX,
        }
    }

    fn is_valid_cashaddr(&self, address: &str) -> bool {
        let expected = self.prefix();
        let Some(decoded) = cashaddr::decode(address, expected) else {
            return false;
        };
        if decoded.prefix != expected {
            tracing::debug!(prefix = %decoded.prefix, expected, "cashaddr prefix mismatch");
            return false;
        }
        matches!(decoded.version, VERSION_P2PKH | VERSION_P2SH) && decoded.hash.len() == HASH_LEN
    }
}

impl AddressValidator for BitcoinCashValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        let raw = address.address();
        if raw.is_empty() {
            return false;
        }
        self.is_valid_cashaddr(raw) || self.legacy.is_valid_legacy(raw)
    }
}
