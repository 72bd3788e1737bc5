//! chainaddr - 多链地址格式校验
//!
//! 给定地址与链描述符，判断地址是否符合该链的编码与校验和规则。
//! 只做离线格式校验，不访问网络，也不判断账户是否存在。
//!
//! ```
//! use chainaddr::{validate, Chain};
//!
//! assert_eq!(validate("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "btc"), Ok(true));
//! assert_eq!(validate("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", Chain::testnet("bitcoin")), Ok(false));
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;
pub mod validators;

// 重新导出常用类型
pub use domain::{Address, Chain, ChainRegistry, NetworkType};
pub use error::{Result, ValidatorError};
pub use validators::AddressValidator;

/// 使用内置注册表校验地址
///
/// 链不存在时返回 `Err(ValidatorError::MissingValidator)`；地址无效返回 `Ok(false)`。
pub fn validate(address: impl Into<Address>, chain: impl Into<Chain>) -> Result<bool> {
    ChainRegistry::shared()?.validate(&address.into(), &chain.into())
}

/// 使用内置注册表校验 memo / destination tag
pub fn validate_memo(memo: &str, chain: impl Into<Chain>) -> Result<bool> {
    ChainRegistry::shared()?.validate_memo(memo, &chain.into())
}

pub mod prelude {
    pub use crate::{
        domain::{Address, Chain, ChainRegistry, NetworkType},
        error::{Result, ValidatorError},
        validate, validate_memo,
        validators::AddressValidator,
    };
}
