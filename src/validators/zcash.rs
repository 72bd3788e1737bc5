//! Zcash 透明地址验证
//!
//! 只支持透明地址（t1/t3 主网，tm/t2 测试网）：
//! 2 字节版本 + 20 字节 HASH160 + 4 字节双重 SHA-256 校验和，共 26 字节。
//! Sapling (zs...) 与 Unified (u...) 地址一律视为无效。

use crate::domain::types::{Address, NetworkType};
use crate::utils::{base58, hash};
use crate::validators::AddressValidator;

const EXPECTED_LEN: usize = 26;
const BODY_LEN: usize = EXPECTED_LEN - 4;

/// t1 (P2PKH), t3 (P2SH)
const MAINNET_PREFIXES: [[u8; 2]; 2] = [[0x1c, 0xb8], [0x1c, 0xbd]];
/// tm (P2PKH), t2 (P2SH)
const TESTNET_PREFIXES: [[u8; 2]; 2] = [[0x1d, 0x25], [0x1c, 0xba]];

#[derive(Debug, Clone)]
pub struct ZcashValidator {
    network: NetworkType,
}

impl ZcashValidator {
    pub fn new(network: NetworkType) -> Self {
        Self { network }
    }

    fn valid_prefixes(&self) -> &'static [[u8; 2]] {
        match self.network {
            NetworkType::MainNet => &MAINNET_PREFIXES,
            NetworkType::TestNet => &TESTNET_PREFIXES,
        }
    }

    fn is_valid_transparent(&self, address: &str) -> bool {
        // 校验和手动验证，这里只做原始 Base58 解码
        let Some(decoded) = base58::decode(address) else {
            return false;
        };
        if decoded.len() != EXPECTED_LEN {
            return false;
        }

        let (body, checksum) = decoded.split_at(BODY_LEN);
        if hash::double_sha256_checksum(body) != checksum {
            tracing::debug!("zcash transparent checksum mismatch");
            return false;
        }

        let prefix = [decoded[0], decoded[1]];
        self.valid_prefixes().contains(&prefix)
    }
}

impl AddressValidator for ZcashValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        self.is_valid_transparent(address.address())
    }
}
