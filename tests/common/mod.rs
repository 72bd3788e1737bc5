//! 测试辅助模块
//! 提供各链固定测试地址与辅助函数

#![allow(dead_code)]

use chainaddr::{Address, Chain};

/// 一条链的测试数据
pub struct ChainFixture {
    pub chain: &'static str,
    pub aliases: &'static [&'static str],
    pub mainnet: &'static [&'static str],
    /// 只有按网络拆分的链才有
    pub testnet: &'static [&'static str],
}

pub const EVM_ADDRESS: &str = "0x742D35cc6634c0532925a3b844bc9E7595F0BEb6";
pub const MOVE_ADDRESS: &str = "0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";

pub const BTC_GENESIS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
pub const BTC_P2SH: &str = "3Ai1JZ8pdJb2ksieUV8FsxSNVJCpoPi8W6";
pub const BTC_P2WPKH: &str = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
pub const BTC_TESTNET_P2PKH: &str = "mpXwg4jMtRhuSpVq4xS3HFHmCmWp9NyGKt";
pub const BTC_TESTNET_P2SH: &str = "2N2GDNJ4rEm6NxfMC9ck8VuRdheQzXWaNZv";

/// Alice 公钥，SS58 前缀 42 / 0
pub const SS58_PREFIX_42: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
pub const SS58_PREFIX_0: &str = "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5";
pub const SS58_PREFIX_2: &str = "HNZata7iMYWmk5RvZRTiAsSDhV8366zq2YGb3tLH5Upf74F";

pub const ZCASH_T1: &str = "t1StbPM4X3j4FGM57HpGnb9BMbS7C1nFW1r";
pub const ZCASH_T3: &str = "t3TacJtYxbdNdMWmYQuwP1mYHjxPuXkQNLp";

pub const RIPPLE_ADDRESS: &str = "rwrzPrePnQGeC5pDMPTCTLnSLmvfD5vC42";
pub const STELLAR_ADDRESS: &str = "GDKDLE6HCX65GHDBCQNL2BFJT7LIELEFLCCUZTPDTJLIJZ5FNWRH2BBY";

pub const FIXTURES: &[ChainFixture] = &[
    ChainFixture {
        chain: "algorand",
        aliases: &[],
        mainnet: &["2Q2ZHRYV7XJRYYIUDK6QJKM722BCZBKYQVGM3Y42K2COPJLNUJ6QT5ULYA"],
        testnet: &[],
    },
    ChainFixture {
        chain: "aptos",
        aliases: &[],
        mainnet: &[MOVE_ADDRESS],
        testnet: &[],
    },
    ChainFixture {
        chain: "bitcoin",
        aliases: &["btc", "omni"],
        mainnet: &[BTC_GENESIS, BTC_P2SH, BTC_P2WPKH],
        testnet: &[
            BTC_TESTNET_P2PKH,
            BTC_TESTNET_P2SH,
            "RJJBTXXfgE5DjiPQpZSnYrQe73NhrBZ3ao",
            "GSruo8yL4FswkBKWHL7mt6RLFwhxBe2GVb",
            "tb1qvt5s0v2uhuna2sjnn84ldu8m2r4m3rcclfw5ch",
        ],
    },
    ChainFixture {
        chain: "bitcoincash",
        aliases: &["bch", "bitcoin-cash", "bitcoin cash"],
        mainnet: &[
            "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
            "bitcoincash:pp3wjpa3tjlj042z2wv7hahsldgwhwy0rqj4ep4zle",
            "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu",
        ],
        testnet: &[
            "bchtest:qp3wjpa3tjlj042z2wv7hahsldgwhwy0rqpzqfskrc",
            "bchtest:pp3wjpa3tjlj042z2wv7hahsldgwhwy0rqk8axh4c9",
        ],
    },
    ChainFixture {
        chain: "bittensor",
        aliases: &["tao"],
        mainnet: &[SS58_PREFIX_42],
        testnet: &[],
    },
    ChainFixture {
        chain: "cardano",
        aliases: &["ada"],
        mainnet: &[
            "addr1q82rty78zh7ax8rpzsdt6p9fnltgyty9tzz5en0rnftgfeuw4uzp2958wd3jdj0759lztlzjsasndy7fz2gfev3x4frskj4u6e",
            "Ae2tdPwUPEZHysLRECeKvivYyjPh8Gsaxo1MwFYheHWAQK3gYqzZtKtUWQq",
        ],
        testnet: &[],
    },
    ChainFixture {
        chain: "doge",
        aliases: &["dogecoin"],
        mainnet: &[
            "DEA5vGb2NpAwCiCp5yTE16F3DueQUVivQp",
            "A1TG3QCihNTvfF67tcng864kBsarnaPyFm",
        ],
        testnet: &["ndD9eHKwJndf5gn17o6gFVqLTn2hXk9FFJ", BTC_TESTNET_P2SH],
    },
    ChainFixture {
        chain: "eos",
        aliases: &[],
        mainnet: &["eosio.token"],
        testnet: &[],
    },
    ChainFixture {
        chain: "ethereum",
        aliases: &[
            "arbitrum",
            "avalanche",
            "avalanche-c",
            "base",
            "berachain",
            "binance",
            "BinanceSmartChain",
            "bnb",
            "bsc",
            "eth",
            "EthereumClassic",
            "EthereumPow",
            "erc20",
            "flare",
            "optimism",
            "sonic",
            "story",
        ],
        mainnet: &[EVM_ADDRESS, "0x742d35cc6634c0532925a3b844bc9e7595f0beb6"],
        testnet: &[],
    },
    ChainFixture {
        chain: "hedera",
        aliases: &["hbar"],
        mainnet: &["0.0.98"],
        testnet: &[],
    },
    ChainFixture {
        chain: "litecoin",
        aliases: &["ltc"],
        mainnet: &[
            "LUEweDxDA4WhvWiNXXSxjM9CYzHPJv4QQF",
            "MGv9cSYnaRSTZNzYaN7bhbgmozoGkKBvCn",
            "ltc1qvt5s0v2uhuna2sjnn84ldu8m2r4m3rcc3n0rm5",
        ],
        testnet: &[
            "QVcyVJw6Fs9U6r7Emin9abs4r2rpPhBE1A",
            "tltc1qvt5s0v2uhuna2sjnn84ldu8m2r4m3rccxpv2g7",
            BTC_TESTNET_P2PKH,
        ],
    },
    ChainFixture {
        chain: "monero",
        aliases: &[],
        mainnet: &[
            "49fXoUfREoL5kKD1guYZjcct14ckpHz6Qf52vF9PSjVTN14h8Mbur1GHatrE4SE6cbEodiRRuHqCKTD9VxazRw619DayVQW",
            "8AVg8rKFqDk5kKD1guYZjcct14ckpHz6Qf52vF9PSjVTN14h8Mbur1GHatrE4SE6cbEodiRRuHqCKTD9VxazRw6198NWX8W",
            "4KNCpHUur4r5kKD1guYZjcct14ckpHz6Qf52vF9PSjVTN14h8Mbur1GHatrE4SE6cbEodiRRuHqCKTD9VxazRw61D3VSWEJ8FEM1qp5ZK3",
        ],
        testnet: &[
            "A1D5HjKgXAS5kKD1guYZjcct14ckpHz6Qf52vF9PSjVTN14h8Mbur1GHatrE4SE6cbEodiRRuHqCKTD9VxazRw6199cZtxZ",
            "BgDoRoWcbqc5kKD1guYZjcct14ckpHz6Qf52vF9PSjVTN14h8Mbur1GHatrE4SE6cbEodiRRuHqCKTD9VxazRw619DaS3NK",
            "AAukJY9B8Rx5kKD1guYZjcct14ckpHz6Qf52vF9PSjVTN14h8Mbur1GHatrE4SE6cbEodiRRuHqCKTD9VxazRw61D3VSWEJ8FEM1tU6rTg",
        ],
    },
    ChainFixture {
        chain: "monad",
        aliases: &["mon"],
        mainnet: &[EVM_ADDRESS],
        testnet: &[],
    },
    ChainFixture {
        chain: "nem",
        aliases: &[],
        mainnet: &["NBZHTLWQ5XTTS6FDTOSCYQKRQCAX7UDJBKDRG7CF"],
        testnet: &[],
    },
    ChainFixture {
        chain: "nano",
        aliases: &[],
        mainnet: &["nano_3o3okh5jdzgm5jija8ox1knszon47k4oj3cesqjsnon6wykpuamx46rxsem3"],
        testnet: &[],
    },
    ChainFixture {
        chain: "polkadot",
        aliases: &[],
        mainnet: &[SS58_PREFIX_0, SS58_PREFIX_2],
        testnet: &[],
    },
    ChainFixture {
        chain: "ripple",
        aliases: &["xrp"],
        mainnet: &[RIPPLE_ADDRESS],
        testnet: &[],
    },
    ChainFixture {
        chain: "sia",
        aliases: &["SiaCoin"],
        mainnet: &["2e3fb4c297a84c5cebc0e78257d213d0927ccc7596044c6ba013dd05522aacba5646733e80d2"],
        testnet: &[],
    },
    ChainFixture {
        chain: "solana",
        aliases: &["sol", "spl"],
        mainnet: &[
            "FHNpKmJrUtusuvKPGomAygQqeiks98bdV6yD61Stb6vg",
            "DYw8jCTfwHNRJhhmFcbXvVDTqWMEVFBX6ZKUmG5CNSKK",
        ],
        testnet: &[],
    },
    ChainFixture {
        chain: "sui",
        aliases: &[],
        mainnet: &[MOVE_ADDRESS],
        testnet: &[],
    },
    ChainFixture {
        chain: "tron",
        aliases: &["trc20"],
        mainnet: &["TJzCP527E8Pbpt5qwf7NyUmaFZfRQhiAJx"],
        testnet: &[],
    },
    ChainFixture {
        chain: "tezos",
        aliases: &[],
        mainnet: &[
            "tz1Uf258Wbhz1vy7iLruXDVS75EnEJvhzdSt",
            "tz2HLE3M7B8LwgbyzWukBrTgeeVnkCLfKQCA",
            "tz3VM2zg13FtLK4HQmz1Bov4U1PJX2RMqk7j",
            "KT1HbkwmzTaX6sBCuFAfZaBSwdaPxrgSANhS",
        ],
        testnet: &[],
    },
    ChainFixture {
        chain: "xlm",
        aliases: &["stellar", "stellarlumens"],
        mainnet: &[STELLAR_ADDRESS],
        testnet: &[],
    },
    ChainFixture {
        chain: "zcash",
        aliases: &["zec"],
        mainnet: &[ZCASH_T1, ZCASH_T3],
        testnet: &[
            "tmJjLiBYvSPZkQbGYxYaXSor7CRC1RjQEff",
            "t2FZoMZf6U5yzuDMHLewRZPivrSd5S5qp4n",
        ],
    },
];

/// 已知的跨链同时有效组合：(地址所属链, 同样接受该地址的链)
pub const CROSS_VALID: &[(&str, &str)] = &[
    ("ethereum", "monad"),
    ("monad", "ethereum"),
    ("aptos", "sui"),
    ("sui", "aptos"),
    // Bitcoin Cash 兼容 legacy 地址
    ("bitcoin", "bitcoincash"),
    ("bitcoincash", "bitcoin"),
    // polkadot 不限制前缀
    ("bittensor", "polkadot"),
];

pub fn is_cross_valid(owner: &str, other: &str) -> bool {
    owner == other || CROSS_VALID.contains(&(owner, other))
}

/// 大小写交替，用于验证链名匹配不区分大小写
pub fn alternate_case(name: &str) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

pub fn check(address: &str, chain: impl Into<Chain>) -> bool {
    chainaddr::validate(Address::from(address), chain)
        .unwrap_or_else(|e| panic!("chain should resolve: {e}"))
}
