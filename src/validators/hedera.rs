//! Hedera 账户 ID 验证：`shard.realm.num`，三段均为无前导零的非负十进制整数。
//! memo 不超过 100 字节。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::types::Address;
use crate::validators::{memo_accepted, AddressValidator};

const MEMO_MAX_BYTES: usize = 100;

static ACCOUNT_ID: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$").ok());

#[derive(Debug, Clone, Default)]
pub struct HederaValidator;

impl HederaValidator {
    pub fn new() -> Self {
        Self
    }
}

impl AddressValidator for HederaValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        let account_ok = ACCOUNT_ID
            .as_ref()
            .is_some_and(|re| re.is_match(address.address()));
        account_ok && memo_accepted(self, address)
    }

    fn is_valid_memo(&self, memo: &str) -> bool {
        memo.len() <= MEMO_MAX_BYTES
    }
}
