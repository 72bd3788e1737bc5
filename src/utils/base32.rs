//! Base32 编解码（RFC 4648 与 Nano 字母表）

use data_encoding::{Encoding, Specification, BASE32_NOPAD};
use once_cell::sync::Lazy;

const NANO_ALPHABET: &str = "13456789abcdefghijkmnopqrstuwxyz";

static NANO_BASE32: Lazy<Option<Encoding>> = Lazy::new(|| {
    let mut alphabet = Specification::new();
    alphabet.symbols.push_str(NANO_ALPHABET);
    alphabet.encoding().ok()
});

/// RFC 4648 Base32（大写字母表，无填充）
pub fn decode_rfc4648(input: &str) -> Option<Vec<u8>> {
    if input.is_empty() {
        return None;
    }
    BASE32_NOPAD.decode(input.as_bytes()).ok()
}

/// Nano 字母表 Base32，输入长度须为 8 的整数倍
pub fn decode_nano(input: &str) -> Option<Vec<u8>> {
    if input.is_empty() || input.len() % 8 != 0 {
        return None;
    }
    NANO_BASE32.as_ref()?.decode(input.as_bytes()).ok()
}
