//! 链注册表
//!
//! 把链名/别名解析为地址验证器。名称按小写精确匹配（不去除空白），
//! 构建时检查别名冲突，查询时不会再出现歧义。

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::domain::types::{Address, Chain, NetworkType};
use crate::error::{Result, ValidatorError};
use crate::validators::{
    AddressValidator, AlgorandValidator, BitcoinCashValidator, BitcoinValidator, CardanoValidator,
    EosValidator, EvmValidator, HederaValidator, MoneroValidator, MoveValidator, NanoValidator,
    NemValidator, RippleValidator, SegwitVersion, SiaValidator, SolanaValidator, Ss58Validator,
    StellarValidator, TezosValidator, TronValidator, ZcashValidator,
};

/// 共享验证器句柄
pub type SharedValidator = Arc<dyn AddressValidator>;

/// 一条链的验证器：单一实现，或按主网/测试网拆分
#[derive(Clone)]
pub enum ChainValidator {
    Single(SharedValidator),
    NetworkSplit {
        mainnet: SharedValidator,
        testnet: SharedValidator,
    },
}

impl ChainValidator {
    pub fn single(validator: impl AddressValidator + 'static) -> Self {
        ChainValidator::Single(Arc::new(validator))
    }

    pub fn split(
        mainnet: impl AddressValidator + 'static,
        testnet: impl AddressValidator + 'static,
    ) -> Self {
        ChainValidator::NetworkSplit {
            mainnet: Arc::new(mainnet),
            testnet: Arc::new(testnet),
        }
    }

    /// `Single` 忽略网络类型
    pub fn for_network(&self, network: NetworkType) -> &SharedValidator {
        match (self, network) {
            (ChainValidator::Single(validator), _) => validator,
            (ChainValidator::NetworkSplit { mainnet, .. }, NetworkType::MainNet) => mainnet,
            (ChainValidator::NetworkSplit { testnet, .. }, NetworkType::TestNet) => testnet,
        }
    }
}

/// 注册表条目
#[derive(Clone)]
pub struct ChainEntry {
    pub canonical_name: String,
    pub aliases: Vec<String>,
    pub validator: ChainValidator,
}

impl ChainEntry {
    pub fn new(canonical_name: &str, aliases: &[&str], validator: ChainValidator) -> Self {
        Self {
            canonical_name: canonical_name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            validator,
        }
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical_name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// 链注册表
pub struct ChainRegistry {
    entries: Vec<ChainEntry>,
    /// 小写名称/别名 -> entries 下标
    lookup: HashMap<String, usize>,
}

fn lookup_key(name: &str) -> String {
    name.to_lowercase()
}

static BUILTIN: Lazy<Result<ChainRegistry>> = Lazy::new(ChainRegistry::builtin);

impl ChainRegistry {
    /// 从条目构建注册表，任何名称被两条链声明即失败
    pub fn from_entries(entries: Vec<ChainEntry>) -> Result<Self> {
        let mut lookup: HashMap<String, usize> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            for name in entry.names() {
                if name.trim().is_empty() {
                    return Err(ValidatorError::EmptyChain);
                }
                let key = lookup_key(name);
                match lookup.get(&key) {
                    Some(&existing) if existing != index => {
                        return Err(ValidatorError::AliasCollision {
                            alias: key,
                            first: entries[existing].canonical_name.clone(),
                            second: entry.canonical_name.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        lookup.insert(key, index);
                    }
                }
            }
        }
        Ok(Self { entries, lookup })
    }

    /// 内置链表（每次调用重新构建）
    pub fn builtin() -> Result<Self> {
        Self::from_entries(builtin_entries())
    }

    /// 进程级共享的内置注册表
    pub fn shared() -> Result<&'static ChainRegistry> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// 追加配置中的别名：key 为已存在的链名或别名，value 为新别名列表
    pub fn with_extra_aliases(mut self, extra: &HashMap<String, Vec<String>>) -> Result<Self> {
        // 排序保证冲突报告稳定
        let mut chains: Vec<_> = extra.iter().collect();
        chains.sort_by(|a, b| a.0.cmp(b.0));

        for (chain, aliases) in chains {
            let Some(&index) = self.lookup.get(&lookup_key(chain)) else {
                return Err(ValidatorError::UnknownChain(chain.clone()));
            };
            self.entries[index]
                .aliases
                .extend(aliases.iter().map(|a| a.trim().to_string()));
        }
        Self::from_entries(self.entries)
    }

    /// 解析链描述符对应的验证器
    pub fn resolve(&self, chain: &Chain) -> Result<SharedValidator> {
        let Some(&index) = self.lookup.get(&lookup_key(chain.name())) else {
            tracing::warn!(chain = %chain.name(), "no validator registered for chain");
            return Err(ValidatorError::MissingValidator(chain.name().to_string()));
        };
        let entry = &self.entries[index];
        tracing::debug!(
            chain = %entry.canonical_name,
            network = %chain.network_type(),
            "resolved chain validator"
        );
        Ok(Arc::clone(entry.validator.for_network(chain.network_type())))
    }

    pub fn validate(&self, address: &Address, chain: &Chain) -> Result<bool> {
        let validator = self.resolve(chain)?;
        Ok(validator.is_valid_address(address))
    }

    pub fn validate_memo(&self, memo: &str, chain: &Chain) -> Result<bool> {
        let validator = self.resolve(chain)?;
        Ok(validator.is_valid_memo(memo))
    }

    /// 规范链名，按声明顺序
    pub fn chains(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.canonical_name.as_str())
    }

    /// 某条链的全部别名（不含规范名）
    pub fn aliases(&self, chain: &str) -> Option<&[String]> {
        let index = *self.lookup.get(&lookup_key(chain))?;
        Some(&self.entries[index].aliases)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 内置链
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Bitcoin 版本字节，Bitcoin Cash 的 legacy 地址沿用
const BITCOIN_MAINNET_TYPES: [u8; 2] = [0x00, 0x05];
const BITCOIN_TESTNET_TYPES: [u8; 4] = [0x6f, 0xc4, 0x3c, 0x26];

fn builtin_entries() -> Vec<ChainEntry> {
    // ethereum 与 monad、aptos 与 sui 共享同一个实例
    let evm: SharedValidator = Arc::new(EvmValidator::new());
    let move_vm: SharedValidator = Arc::new(MoveValidator::new());

    vec![
        ChainEntry::new("algorand", &[], ChainValidator::single(AlgorandValidator::new())),
        ChainEntry::new("aptos", &[], ChainValidator::Single(Arc::clone(&move_vm))),
        ChainEntry::new(
            "bitcoin",
            &["btc", "omni"],
            ChainValidator::split(
                BitcoinValidator::new(&BITCOIN_MAINNET_TYPES)
                    .with_bech32(&["bc"], &[SegwitVersion::NativeSegwit]),
                BitcoinValidator::new(&BITCOIN_TESTNET_TYPES)
                    .with_bech32(&["tb"], &[SegwitVersion::NativeSegwit]),
            ),
        ),
        ChainEntry::new(
            "bitcoincash",
            &["bch", "bitcoin-cash", "bitcoin cash"],
            ChainValidator::split(
                BitcoinCashValidator::new(NetworkType::MainNet, &BITCOIN_MAINNET_TYPES),
                BitcoinCashValidator::new(NetworkType::TestNet, &BITCOIN_TESTNET_TYPES),
            ),
        ),
        ChainEntry::new(
            "bittensor",
            &["tao"],
            ChainValidator::single(Ss58Validator::with_network_prefix(42)),
        ),
        ChainEntry::new("cardano", &["ada"], ChainValidator::single(CardanoValidator::new())),
        ChainEntry::new(
            "doge",
            &["dogecoin"],
            ChainValidator::split(
                BitcoinValidator::new(&[0x1e, 0x16]),
                BitcoinValidator::new(&[0x71, 0xc4]),
            ),
        ),
        ChainEntry::new("eos", &[], ChainValidator::single(EosValidator::new())),
        ChainEntry::new(
            "ethereum",
            &[
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
            ChainValidator::Single(Arc::clone(&evm)),
        ),
        ChainEntry::new("hedera", &["hbar"], ChainValidator::single(HederaValidator::new())),
        ChainEntry::new(
            "litecoin",
            &["ltc"],
            ChainValidator::split(
                BitcoinValidator::new(&[0x30, 0x32])
                    .with_bech32(&["ltc"], &[SegwitVersion::NativeSegwit]),
                BitcoinValidator::new(&[0x6f, 0xc4, 0x3a])
                    .with_bech32(&["tltc"], &[SegwitVersion::NativeSegwit]),
            ),
        ),
        ChainEntry::new(
            "monero",
            &[],
            ChainValidator::split(
                MoneroValidator::new(NetworkType::MainNet),
                MoneroValidator::new(NetworkType::TestNet),
            ),
        ),
        ChainEntry::new("monad", &["mon"], ChainValidator::Single(evm)),
        ChainEntry::new("nem", &[], ChainValidator::single(NemValidator::new())),
        ChainEntry::new("nano", &[], ChainValidator::single(NanoValidator::new())),
        ChainEntry::new("polkadot", &[], ChainValidator::single(Ss58Validator::new())),
        ChainEntry::new("ripple", &["xrp"], ChainValidator::single(RippleValidator::new())),
        ChainEntry::new("sia", &["SiaCoin"], ChainValidator::single(SiaValidator::new())),
        ChainEntry::new("solana", &["sol", "spl"], ChainValidator::single(SolanaValidator::new())),
        ChainEntry::new("sui", &[], ChainValidator::Single(move_vm)),
        ChainEntry::new("tron", &["trc20"], ChainValidator::single(TronValidator::new())),
        ChainEntry::new("tezos", &[], ChainValidator::single(TezosValidator::new())),
        ChainEntry::new(
            "xlm",
            &["stellar", "stellarlumens"],
            ChainValidator::single(StellarValidator::new()),
        ),
        ChainEntry::new(
            "zcash",
            &["zec"],
            ChainValidator::split(
                ZcashValidator::new(NetworkType::MainNet),
                ZcashValidator::new(NetworkType::TestNet),
            ),
        ),
    ]
}
