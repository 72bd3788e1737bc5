//! 地址验证器
//!
//! 每个地址族一个验证器。所有验证器：
//! - 无状态，可跨线程共享（`Send + Sync`）
//! - 任何解码/校验失败都返回 `false`，不会 panic，也不会向上抛错误
//! - 默认接受任何 memo，只有定义了 memo 规则的链才覆盖 `is_valid_memo`

use crate::domain::types::Address;

pub mod algorand;
pub mod bitcoin;
pub mod bitcoin_cash;
pub mod cardano;
pub mod eos;
pub mod ethereum;
pub mod hedera;
pub mod monero;
pub mod move_chain;
pub mod nano;
pub mod nem;
pub mod ripple;
pub mod sia;
pub mod solana;
pub mod ss58;
pub mod stellar;
pub mod tezos;
pub mod tron;
pub mod zcash;

pub use algorand::AlgorandValidator;
pub use bitcoin::{BitcoinValidator, SegwitVersion};
pub use bitcoin_cash::BitcoinCashValidator;
pub use cardano::CardanoValidator;
pub use eos::EosValidator;
pub use ethereum::EvmValidator;
pub use hedera::HederaValidator;
pub use monero::MoneroValidator;
pub use move_chain::MoveValidator;
pub use nano::NanoValidator;
pub use nem::NemValidator;
pub use ripple::RippleValidator;
pub use sia::SiaValidator;
pub use solana::SolanaValidator;
pub use ss58::Ss58Validator;
pub use stellar::StellarValidator;
pub use tezos::TezosValidator;
pub use tron::TronValidator;
pub use zcash::ZcashValidator;

/// 地址验证器 trait
pub trait AddressValidator: Send + Sync {
    /// 验证地址格式与校验和
    fn is_valid_address(&self, address: &Address) -> bool;

    /// 验证 memo / tag，默认全部接受
    fn is_valid_memo(&self, _memo: &str) -> bool {
        true
    }
}

/// 带 memo 规则的链：若调用方随地址提供了 memo，memo 也必须合法
pub(crate) fn memo_accepted<V: AddressValidator + ?Sized>(validator: &V, address: &Address) -> bool {
    match address.memo() {
        Some(memo) => validator.is_valid_memo(memo),
        None => true,
    }
}
