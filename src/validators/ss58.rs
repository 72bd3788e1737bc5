//! SS58 地址验证（Substrate 系：Polkadot、Bittensor）
//!
//! 地址 = Base58(类型字节 + 账户/索引字节 + 校验和)
//! 校验和 = BLAKE2b-512("SS58PRE" + 类型字节 + 账户/索引字节) 的前 N 字节

use crate::domain::types::Address;
use crate::utils::{base58, hash};
use crate::validators::AddressValidator;

const CHECKSUM_PREIMAGE: &[u8] = b"SS58PRE";

/// 去掉类型字节后的长度 -> (账户/索引长度, 校验和长度)
fn address_format(len: usize) -> Option<(usize, usize)> {
    let format = match len {
        3 => (1, 1),
        4 => (2, 1),
        5 => (2, 2),
        6 => (4, 1),
        7 => (4, 2),
        8 => (4, 3),
        9 => (4, 4),
        10 => (8, 1),
        11 => (8, 2),
        12 => (8, 3),
        13 => (8, 4),
        14 => (8, 5),
        15 => (8, 6),
        16 => (8, 7),
        17 => (8, 8),
        34 => (32, 2),
        _ => return None,
    };
    Some(format)
}

/// SS58 验证器，可选限定网络前缀
#[derive(Debug, Clone, Default)]
pub struct Ss58Validator {
    network_prefix: Option<u8>,
}

impl Ss58Validator {
    /// 不限制网络前缀
    pub fn new() -> Self {
        Self::default()
    }

    /// 只接受指定前缀（十进制 0..=255），如 Bittensor = 42
    pub fn with_network_prefix(prefix: u8) -> Self {
        Self {
            network_prefix: Some(prefix),
        }
    }

    fn verify_checksum(&self, address: &str) -> bool {
        let Some(decoded) = base58::decode(address) else {
            return false;
        };
        let Some((&address_type, rest)) = decoded.split_first() else {
            return false;
        };

        if let Some(expected) = self.network_prefix {
            if address_type != expected {
                tracing::debug!(address_type, expected, "ss58 network prefix mismatch");
                return false;
            }
        }

        let Some((index_len, checksum_len)) = address_format(rest.len()) else {
            tracing::debug!(len = rest.len(), "unsupported ss58 address length");
            return false;
        };

        let account = &rest[..index_len];
        let checksum = &rest[rest.len() - checksum_len..];
        let digest = hash::blake2b_512(&[CHECKSUM_PREIMAGE, &[address_type], account]);

        digest[..checksum_len] == *checksum
    }
}

impl AddressValidator for Ss58Validator {
    fn is_valid_address(&self, address: &Address) -> bool {
        self.verify_checksum(address.address())
    }
}
