//! Nano 地址验证
//!
//! `nano_` / `xrb_` + 60 个 Nano-Base32 字符：
//! - 前 52 字符：4 个零填充位 + 32 字节公钥
//! - 后 8 字符：BLAKE2b-40(公钥) 字节倒序

use crate::domain::types::Address;
use crate::utils::{base32, hash};
use crate::validators::AddressValidator;

const PREFIXES: [&str; 2] = ["nano_", "xrb_"];
const ENCODED_LEN: usize = 60;
const ACCOUNT_CHARS: usize = 52;
const CHECKSUM_LEN: usize = 5;
/// 52 字符前补 4 个 '1'（值为 0），凑成 8 的整数倍
const ACCOUNT_PAD: &str = "1111";

#[derive(Debug, Clone, Default)]
pub struct NanoValidator;

impl NanoValidator {
    pub fn new() -> Self {
        Self
    }

    fn verify(address: &str) -> bool {
        let Some(encoded) = PREFIXES.iter().find_map(|p| address.strip_prefix(p)) else {
            return false;
        };
        if encoded.len() != ENCODED_LEN || !encoded.is_ascii() {
            return false;
        }

        let (account_part, checksum_part) = encoded.split_at(ACCOUNT_CHARS);
        let Some(padded) = base32::decode_nano(&format!("{ACCOUNT_PAD}{account_part}")) else {
            return false;
        };
        // "1111" 补的 20 位 + 原有 4 个填充位，共 24 位必须全为 0
        let (pad, pubkey) = padded.split_at(padded.len() - 32);
        if pad.iter().any(|&b| b != 0) {
            return false;
        }

        let Some(checksum) = base32::decode_nano(checksum_part) else {
            return false;
        };
        let Some(mut expected) = hash::blake2b_var(pubkey, CHECKSUM_LEN) else {
            return false;
        };
        expected.reverse();
        expected == checksum
    }
}

impl AddressValidator for NanoValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        Self::verify(address.address())
    }
}
