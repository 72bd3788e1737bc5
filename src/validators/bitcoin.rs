//! Bitcoin 系地址验证（Base58Check 版本字节 + 可选 Bech32/SegWit）
//!
//! 同一实现按版本字节集合/HRP 参数化，供 Bitcoin、Litecoin、Dogecoin 使用。

use crate::domain::types::Address;
use crate::utils::{base58, segwit};
use crate::validators::AddressValidator;

/// 版本字节(1) + HASH160(20)
const LEGACY_PAYLOAD_LEN: usize = 21;

/// 允许的见证版本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegwitVersion {
    /// v0: P2WPKH / P2WSH（Bech32 校验常量）
    NativeSegwit = 0,
    /// v1: Taproot（Bech32m 校验常量）
    Taproot = 1,
}

/// Bitcoin 系验证器
#[derive(Debug, Clone)]
pub struct BitcoinValidator {
    address_types: Vec<u8>,
    bech32_hrp: Vec<String>,
    allowed_segwit_versions: Vec<u8>,
}

impl BitcoinValidator {
    /// 仅 Base58Check，接受给定版本字节
    pub fn new(address_types: &[u8]) -> Self {
        Self {
            address_types: address_types.to_vec(),
            bech32_hrp: Vec::new(),
            allowed_segwit_versions: Vec::new(),
        }
    }

    /// 追加 Bech32/SegWit 支持
    pub fn with_bech32(mut self, hrps: &[&str], versions: &[SegwitVersion]) -> Self {
        self.bech32_hrp = hrps.iter().map(|h| h.to_ascii_lowercase()).collect();
        self.allowed_segwit_versions = versions.iter().map(|v| *v as u8).collect();
        self
    }

    /// Base58Check 解码并匹配版本字节
    pub fn is_valid_legacy(&self, address: &str) -> bool {
        let Some(payload) = base58::decode_check(address) else {
            return false;
        };
        if payload.len() != LEGACY_PAYLOAD_LEN {
            tracing::debug!(len = payload.len(), "legacy payload length mismatch");
            return false;
        }
        self.address_types.contains(&payload[0])
    }

    fn is_valid_segwit(&self, address: &str) -> bool {
        if self.bech32_hrp.is_empty() {
            return false;
        }
        let Some(witness) = segwit::decode_segwit(address) else {
            return false;
        };
        if !self.bech32_hrp.contains(&witness.hrp) {
            tracing::debug!(hrp = %witness.hrp, "unexpected bech32 hrp");
            return false;
        }
        self.allowed_segwit_versions.contains(&witness.version)
    }
}

impl AddressValidator for BitcoinValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        let raw = address.address();
        if raw.is_empty() {
            return false;
        }
        self.is_valid_legacy(raw) || self.is_valid_segwit(raw)
    }
}
