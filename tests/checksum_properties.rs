//! 校验和敏感性：对有效地址替换任意一个字符（换成同字母表中的另一个字符）后，
//! 地址必须变为无效。

mod common;

use common::*;
use proptest::prelude::*;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// 把 `address` 第 `position` 个字符换成 `alphabet` 中另一个字符
fn substitute(address: &str, position: usize, pick: usize, alphabet: &str) -> String {
    let mut chars: Vec<char> = address.chars().collect();
    let position = position % chars.len();
    let alphabet: Vec<char> = alphabet.chars().collect();
    let mut replacement = alphabet[pick % alphabet.len()];
    if replacement == chars[position] {
        replacement = alphabet[(pick + 1) % alphabet.len()];
    }
    chars[position] = replacement;
    chars.into_iter().collect()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn base58check_single_substitution_is_rejected(
        fixture in prop::sample::select(vec![
            (BTC_GENESIS, "bitcoin"),
            (BTC_P2SH, "bitcoin"),
            ("DEA5vGb2NpAwCiCp5yTE16F3DueQUVivQp", "doge"),
            ("LUEweDxDA4WhvWiNXXSxjM9CYzHPJv4QQF", "litecoin"),
        ]),
        position in 0usize..64,
        pick in 0usize..58,
    ) {
        let (address, chain) = fixture;
        let mutated = substitute(address, position, pick, BASE58_ALPHABET);
        prop_assert_ne!(&mutated, address);
        prop_assert!(!check(&mutated, chain), "{} accepted for {}", mutated, chain);
    }

    #[test]
    fn bech32_single_substitution_is_rejected(
        position in 0usize..64,
        pick in 0usize..32,
    ) {
        // 只替换分隔符 '1' 之后的数据部分
        let (hrp, data) = BTC_P2WPKH.split_at(BTC_P2WPKH.rfind('1').unwrap() + 1);
        let mutated = format!("{hrp}{}", substitute(data, position, pick, BECH32_CHARSET));
        prop_assert_ne!(mutated.as_str(), BTC_P2WPKH);
        prop_assert!(!check(&mutated, "bitcoin"));
    }

    #[test]
    fn ss58_single_substitution_is_rejected(
        address in prop::sample::select(vec![SS58_PREFIX_42, SS58_PREFIX_0]),
        position in 0usize..64,
        pick in 0usize..58,
    ) {
        let mutated = substitute(address, position, pick, BASE58_ALPHABET);
        prop_assert!(!check(&mutated, "polkadot"), "{} accepted", mutated);
    }

    #[test]
    fn zcash_single_substitution_is_rejected(
        address in prop::sample::select(vec![ZCASH_T1, ZCASH_T3]),
        position in 0usize..64,
        pick in 0usize..58,
    ) {
        let mutated = substitute(address, position, pick, BASE58_ALPHABET);
        prop_assert!(!check(&mutated, "zcash"), "{} accepted", mutated);
    }

    #[test]
    fn arbitrary_strings_never_panic(input in "\\PC{0,120}") {
        for fixture in FIXTURES {
            let _ = check(&input, fixture.chain);
            let _ = chainaddr::validate_memo(&input, fixture.chain);
        }
    }
}
