//! Solana 地址验证（Base58 编码的 32 字节公钥）

use crate::domain::types::Address;
use crate::utils::base58;
use crate::validators::AddressValidator;

const MIN_LEN: usize = 43;
const MAX_LEN: usize = 44;
const PUBKEY_LEN: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct SolanaValidator;

impl SolanaValidator {
    pub fn new() -> Self {
        Self
    }
}

impl AddressValidator for SolanaValidator {
    fn is_valid_address(&self, address: &Address) -> bool {
        let raw = address.address();
        if !(MIN_LEN..=MAX_LEN).contains(&raw.len()) {
            return false;
        }
        base58::decode(raw).is_some_and(|decoded| decoded.len() == PUBKEY_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(address: &str) -> bool {
        SolanaValidator::new().is_valid_address(&Address::from(address))
    }

    #[test]
    fn test_solana_addresses() {
        assert!(check("FHNpKmJrUtusuvKPGomAygQqeiks98bdV6yD61Stb6vg"));
        assert!(check("DYw8jCTfwHNRJhhmFcbXvVDTqWMEVFBX6ZKUmG5CNSKK"));
    }

    #[test]
    fn test_invalid_solana_addresses() {
        assert!(!check("invalid"));
        assert!(!check("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb6"));
        // 合法公钥但短于 43 字符
        assert!(!check("11111111111111111111111111111112"));
        // 含非 Base58 字符
        assert!(!check("FHNpKmJrUtusuvKPGomAygQqeiks98bdV6yD61Stb6v0"));
        assert!(!check(""));
    }
}
