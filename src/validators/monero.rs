//! Monero 地址验证
//!
//! Monero 分块 Base58：varint 网络标签 + 公共花费密钥(32) + 公共查看密钥(32)
//! [+ 8 字节 payment id（集成地址）] + 4 字节 Keccak-256 校验和。

use crate::domain::types::{Address, NetworkType};
use crate::utils::{base58, hash};
use crate::validators::AddressValidator;

const KEYS_LEN: usize = 64;
const PAYMENT_ID_LEN: usize = 8;
const CHECKSUM_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddressKind {
    Standard,
    Integrated,
    Subaddress,
}

impl AddressKind {
    fn body_len(self) -> usize {
        match self {
            AddressKind::Integrated => KEYS_LEN + PAYMENT_ID_LEN,
            AddressKind::Standard | AddressKind::Subaddress => KEYS_LEN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MoneroValidator {
    network: NetworkType,
}

impl MoneroValidator {
    pub fn new(network: NetworkType) -> Self {
        Self { network }
    }

    fn address_kind(&self, tag: u64) -> Option<AddressKind> {
        match (self.network, tag) {
            (NetworkType::MainNet, 18) | (NetworkType::TestNet, 53) => Some(AddressKind::Standard),
            (NetworkType::MainNet, 19) | (NetworkType::TestNet, 54) => {
                Some(AddressKind::Integrated)
            }
            (NetworkType::MainNet, 42) | (NetworkType::TestNet, 63) => {
                Some(AddressKind::Subaddress)
            }
            _ => None,
        }
    }

    fn verify(&self, address: &str) -> bool {
        let Some(decoded) = base58::decode_monero(address) else {
            return false;
        };
        let Some((tag, tag_len)) = read_varint(&decoded) else {
            return false;
        };
        let Some(kind) = self.address_kind(tag) else {
            tracing::debug!(tag, network = %self.network, "unexpected monero network tag");
            return false;
        };
        if decoded.len() != tag_len + kind.body_len() + CHECKSUM_LEN {
            return false;
        }

        let (body, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
        hash::keccak256(body)[..CHECKSUM_LEN] == *checksum
    }
}

/// 读取 LEB128 varint，返回 (值, 占用字节数)
fn read_varint(data: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in data.iter().enumerate().take(9) {
        value |= ((byte & 0x7f) as u64) << (7 * i);
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}

impl AddressValidator for MoneroValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        self.verify(address.address())
    }
}
