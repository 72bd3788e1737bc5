//! Cardano 地址验证
//!
//! - Shelley：Bech32，HRP `addr`，首字节低 4 位为网络 ID（主网 = 1）
//! - Byron：Base58 → CBOR `[tag24(bytes), uint]`，uint 为内层字节的 CRC32

use crate::domain::types::Address;
use crate::utils::{base58, hash, segwit};
use crate::validators::AddressValidator;

const SHELLEY_HRP: &str = "addr";
const MAINNET_NETWORK_ID: u8 = 0x01;
/// header + 28 字节支付凭证
const SHELLEY_MIN_LEN: usize = 29;

#[derive(Debug, Clone, Default)]
pub struct CardanoValidator;

impl CardanoValidator {
    pub fn new() -> Self {
        Self
    }

    fn is_valid_shelley(address: &str) -> bool {
        let Some((hrp, data)) = segwit::decode_plain(address) else {
            return false;
        };
        if hrp != SHELLEY_HRP || data.len() < SHELLEY_MIN_LEN {
            return false;
        }
        data[0] & 0x0f == MAINNET_NETWORK_ID
    }

    fn is_valid_byron(address: &str) -> bool {
        let Some(decoded) = base58::decode(address) else {
            return false;
        };
        let Some((payload, crc)) = parse_byron_envelope(&decoded) else {
            return false;
        };
        let matches = hash::crc32(payload) as u64 == crc;
        if !matches {
            tracing::debug!("cardano byron crc32 mismatch");
        }
        matches
    }
}

impl AddressValidator for CardanoValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        let address = address.address();
        Self::is_valid_shelley(address) || Self::is_valid_byron(address)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 最小 CBOR 读取（只覆盖 Byron 外层结构）
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const MAJOR_UINT: u8 = 0;
const MAJOR_BYTES: u8 = 2;
const MAJOR_ARRAY: u8 = 4;
const MAJOR_TAG: u8 = 6;
const TAG_ENCODED_CBOR: u64 = 24;

struct CborReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> CborReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let slice = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    /// 读取头部，返回 (major type, argument)；不支持不定长编码
    fn header(&mut self) -> Option<(u8, u64)> {
        let initial = *self.take(1)?.first()?;
        let major = initial >> 5;
        let info = initial & 0x1f;
        let argument = match info {
            0..=23 => info as u64,
            24 => self.take(1)?[0] as u64,
            25 => u16::from_be_bytes(self.take(2)?.try_into().ok()?) as u64,
            26 => u32::from_be_bytes(self.take(4)?.try_into().ok()?) as u64,
            27 => u64::from_be_bytes(self.take(8)?.try_into().ok()?),
            _ => return None,
        };
        Some((major, argument))
    }

    fn read_major(&mut self, major: u8) -> Option<u64> {
        match self.header()? {
            (m, argument) if m == major => Some(argument),
            _ => None,
        }
    }

    fn is_done(&self) -> bool {
        self.pos == self.data.len()
    }
}

/// 解析 `[tag24(bytes), uint]`，返回 (内层字节, crc)
fn parse_byron_envelope(data: &[u8]) -> Option<(&[u8], u64)> {
    let mut reader = CborReader::new(data);
    if reader.read_major(MAJOR_ARRAY)? != 2 || reader.read_major(MAJOR_TAG)? != TAG_ENCODED_CBOR {
        return None;
    }
    let len = usize::try_from(reader.read_major(MAJOR_BYTES)?).ok()?;
    let payload = reader.take(len)?;
    let crc = reader.read_major(MAJOR_UINT)?;
    reader.is_done().then_some((payload, crc))
}
