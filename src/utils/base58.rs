//! Base58 编解码
//!
//! - 比特币字母表 Base58 / Base58Check（bs58）
//! - Ripple 字母表 Base58Check
//! - Monero 分块 Base58（8 字节一块，对应 11 个字符）

/// 原始 Base58 解码（不做 Check 校验）
pub fn decode(input: &str) -> Option<Vec<u8>> {
    if input.is_empty() {
        return None;
    }
    bs58::decode(input).into_vec().ok()
}

/// Base58Check 解码：校验双重 SHA-256 校验和，返回去掉校验和后的
/// 数据（含版本字节）
pub fn decode_check(input: &str) -> Option<Vec<u8>> {
    if input.is_empty() {
        return None;
    }
    bs58::decode(input).with_check(None).into_vec().ok()
}

/// Ripple 字母表的 Base58Check 解码
pub fn decode_check_ripple(input: &str) -> Option<Vec<u8>> {
    if input.is_empty() {
        return None;
    }
    bs58::decode(input)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check(None)
        .into_vec()
        .ok()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Monero Base58
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const FULL_BLOCK_SIZE: usize = 8;
const FULL_ENCODED_BLOCK_SIZE: usize = 11;

/// 编码块长度 -> 解码字节数（下标为字符数）
const ENCODED_BLOCK_SIZES: [usize; 9] = [0, 2, 3, 5, 6, 7, 9, 10, 11];

fn alphabet_index(c: u8) -> Option<u64> {
    ALPHABET.iter().position(|&a| a == c).map(|i| i as u64)
}

fn decode_block(block: &[u8], out: &mut Vec<u8>) -> Option<()> {
    let size = ENCODED_BLOCK_SIZES.iter().position(|&s| s == block.len())?;
    if size == 0 {
        return None;
    }

    let mut num: u128 = 0;
    for &c in block {
        num = num * 58 + alphabet_index(c)? as u128;
    }

    // 块值不能超出该块字节数的表示范围
    if size < FULL_BLOCK_SIZE && num >= 1u128 << (8 * size) {
        return None;
    }
    if num > u64::MAX as u128 {
        return None;
    }

    let bytes = (num as u64).to_be_bytes();
    out.extend_from_slice(&bytes[FULL_BLOCK_SIZE - size..]);
    Some(())
}

/// Monero 分块 Base58 解码
pub fn decode_monero(input: &str) -> Option<Vec<u8>> {
    let raw = input.as_bytes();
    if raw.is_empty() {
        return None;
    }

    let mut out = Vec::with_capacity(raw.len() * FULL_BLOCK_SIZE / FULL_ENCODED_BLOCK_SIZE + 1);
    for block in raw.chunks(FULL_ENCODED_BLOCK_SIZE) {
        decode_block(block, &mut out)?;
    }
    Some(out)
}
