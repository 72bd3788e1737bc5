//! CashAddr 解码（Bitcoin Cash）
//!
//! 与 Bech32 字符集相同，但校验和算法不同：
//! - 40 bit polymod，5 个生成元
//! - 前缀只取每个字符的低 5 位，后接一个 0
//! - 分隔符为 ':'，且前缀可省略
//!
//! 这里只借用 bech32 crate 的 `Fe32` 做字符映射，位转换与校验和自己实现。

use bech32::Fe32;

const CHECKSUM_LEN: usize = 8;

const GENERATORS: [u64; 5] = [
    0x98_f2bc_8e61,
    0x79_b76d_99e2,
    0xf3_3e5f_b3c4,
    0xae_2eab_e2a8,
    0x1e_4f43_e470,
];

/// 解码后的 CashAddr
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashAddr {
    pub prefix: String,
    pub version: u8,
    pub hash: Vec<u8>,
}

fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07_ffff_ffff) << 5) ^ d as u64;
        for (i, generator) in GENERATORS.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= generator;
            }
        }
    }
    c ^ 1
}

fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut out: Vec<u8> = prefix.bytes().map(|b| b & 0x1f).collect();
    out.push(0);
    out
}

/// 5-bit -> 8-bit，填充位必须全部为 0 且不足 5 位
fn convert_bits_5_to_8(data: &[u8]) -> Option<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity(data.len() * 5 / 8);
    for &value in data {
        acc = (acc << 5) | value as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
        acc &= (1 << bits) - 1;
    }
    if bits >= 5 || acc != 0 {
        return None;
    }
    Some(out)
}

/// 解码 CashAddr
///
/// `default_prefix` 用于地址省略前缀的情况；若地址自带前缀，返回的
/// `prefix` 为地址中的前缀（小写），由调用方比对网络。
pub fn decode(address: &str, default_prefix: &str) -> Option<CashAddr> {
    let has_lower = address.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = address.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return None;
    }

    let lowered = address.to_ascii_lowercase();
    let (prefix, payload) = match lowered.split_once(':') {
        Some((prefix, payload)) => (prefix.to_string(), payload),
        None => (default_prefix.to_string(), lowered.as_str()),
    };
    if prefix.is_empty() || payload.len() <= CHECKSUM_LEN {
        return None;
    }

    let mut values = Vec::with_capacity(payload.len());
    for c in payload.chars() {
        values.push(Fe32::from_char(c).ok()?.to_u8());
    }

    let mut checked = expand_prefix(&prefix);
    checked.extend_from_slice(&values);
    if polymod(&checked) != 0 {
        return None;
    }

    let data = convert_bits_5_to_8(&values[..values.len() - CHECKSUM_LEN])?;
    let (&version, hash) = data.split_first()?;
    Some(CashAddr {
        prefix,
        version,
        hash: hash.to_vec(),
    })
}
