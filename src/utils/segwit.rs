//! Bech32 / SegWit 解码（bech32 crate 0.11 API）

use bech32::segwit;

/// 解码后的见证程序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessProgram {
    /// 小写 HRP
    pub hrp: String,
    pub version: u8,
    pub program: Vec<u8>,
}

/// 解码 SegWit 地址
///
/// bech32 crate 已经负责：
/// - 大小写混用拒绝
/// - v0 使用 Bech32 校验常量、v1+ 使用 Bech32m
/// - 见证程序长度（v0 为 20 或 32 字节，其余 2..=40）
pub fn decode_segwit(address: &str) -> Option<WitnessProgram> {
    let (hrp, version, program) = segwit::decode(address).ok()?;
    Some(WitnessProgram {
        hrp: hrp.to_lowercase(),
        version: version.to_u8(),
        program,
    })
}

/// 普通 Bech32 / Bech32m 解码（不含见证版本语义），返回小写 HRP 与 8-bit 数据
pub fn decode_plain(address: &str) -> Option<(String, Vec<u8>)> {
    let (hrp, data) = bech32::decode(address).ok()?;
    Some((hrp.to_lowercase(), data))
}
