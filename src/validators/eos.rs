//! EOS 账户名验证
//!
//! 账户名 1 到 12 个字符，字符集 `a-z`、`1-5`、`.`，不能以 `.` 结尾。
//! memo 不超过 256 字节。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::types::Address;
use crate::validators::{memo_accepted, AddressValidator};

const MEMO_MAX_BYTES: usize = 256;

static ACCOUNT_NAME: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-z1-5.]{0,11}[a-z1-5]$").ok());

#[derive(Debug, Clone, Default)]
pub struct EosValidator;

impl EosValidator {
    pub fn new() -> Self {
        Self
    }

    fn is_valid_account_name(name: &str) -> bool {
        ACCOUNT_NAME.as_ref().is_some_and(|re| re.is_match(name))
    }
}

impl AddressValidator for EosValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        Self::is_valid_account_name(address.address()) && memo_accepted(self, address)
    }

    fn is_valid_memo(&self, memo: &str) -> bool {
        memo.len() <= MEMO_MAX_BYTES
    }
}
