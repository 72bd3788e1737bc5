//! 校验和/哈希原语
//!
//! 纯函数，不包含任何链知识。

use blake2::{
    digest::{Update, VariableOutput},
    Blake2b512, Blake2bVar,
};
use sha2::{Digest, Sha256, Sha512_256};
use sha3::Keccak256;

/// 双重 SHA-256 的前 4 字节（Base58Check 校验和）
pub fn double_sha256_checksum(payload: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(payload);
    let second = Sha256::digest(first);
    let mut out = [0u8; 4];
    out.copy_from_slice(&second[..4]);
    out
}

/// BLAKE2b-512，按顺序拼接所有片段
pub fn blake2b_512(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    for part in parts {
        Digest::update(&mut hasher, part);
    }
    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// 变长 BLAKE2b（1..=64 字节），长度非法时返回 None
pub fn blake2b_var(data: &[u8], output_len: usize) -> Option<Vec<u8>> {
    let mut hasher = Blake2bVar::new(output_len).ok()?;
    hasher.update(data);
    let mut out = vec![0u8; output_len];
    hasher.finalize_variable(&mut out).ok()?;
    Some(out)
}

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Keccak256::digest(data));
    out
}

pub fn sha512_256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha512_256::digest(data));
    out
}

/// CRC16-XModem（多项式 0x1021，初值 0），Stellar StrKey 使用
pub fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// CRC-32（IEEE 802.3，反射多项式 0xEDB88320），Cardano Byron 地址使用
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc: u32 = 0xFFFF_FFFF;
    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}
