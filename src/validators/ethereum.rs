//! EVM 地址验证（支持 EIP-55 Checksum）
//!
//! Ethereum 及所有 EVM 兼容链（Arbitrum、BSC、Optimism、Monad 等）共享同一实例。

use crate::domain::types::Address;
use crate::utils::hash;
use crate::validators::AddressValidator;

const HEX_LEN: usize = 40;

#[derive(Debug, Clone, Default)]
pub struct EvmValidator;

impl EvmValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_evm_address(address: &str) -> bool {
        // 1. 基本格式检查
        let Some(hex_part) = address.strip_prefix("0x") else {
            return false;
        };
        if hex_part.len() != HEX_LEN {
            return false;
        }

        // 2. 验证 hex 字符
        if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return false;
        }

        // 3. 全小写或全大写视为未带 checksum
        let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
        if !(has_lower && has_upper) {
            return true;
        }

        Self::verify_eip55_checksum(hex_part)
    }

    /// 验证 EIP-55 Checksum
    /// https://eips.ethereum.org/EIPS/eip-55
    fn verify_eip55_checksum(hex_part: &str) -> bool {
        let digest = hash::keccak256(hex_part.to_ascii_lowercase().as_bytes());

        hex_part.chars().enumerate().all(|(i, ch)| {
            if !ch.is_ascii_alphabetic() {
                return true;
            }
            let hash_byte = digest[i / 2];
            let hash_nibble = if i % 2 == 0 {
                hash_byte >> 4
            } else {
                hash_byte & 0x0f
            };
            ch.is_ascii_uppercase() == (hash_nibble >= 8)
        })
    }
}

impl AddressValidator for EvmValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        Self::validate_evm_address(address.address())
    }
}
