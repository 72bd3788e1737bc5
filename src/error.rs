//! 错误类型
//!
//! 只有“调用方用错了”才会成为错误：链不存在、别名冲突等。
//! 地址本身无效永远返回 `Ok(false)`，不会走到这里。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    /// 注册表中找不到该链（含别名）
    #[error("Missing validator for chain: {0}")]
    MissingValidator(String),

    /// 注册表条目的链名或别名为空（构建时）
    #[error("Chain identifier cannot be empty")]
    EmptyChain,

    /// 同一个名称/别名被两条链声明（构建注册表时立即失败）
    #[error("Alias '{alias}' is claimed by both '{first}' and '{second}'")]
    AliasCollision {
        alias: String,
        first: String,
        second: String,
    },

    /// 额外别名配置引用了不存在的链
    #[error("Alias configuration references unknown chain: {0}")]
    UnknownChain(String),
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
