//! 请求级别的输入类型
//!
//! - `Address`: 裸字符串或 `{address, memo}`
//! - `Chain`: 裸链名或 `{chain, networkType}`
//! - `NetworkType`: `"mainnet"` / `"testnet"`

use std::fmt;

use serde::{Deserialize, Serialize};

/// 网络类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[default]
    MainNet,
    TestNet,
}

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::MainNet => "mainnet",
            NetworkType::TestNet => "testnet",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 待验证地址
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Address {
    Plain(String),
    WithMemo {
        address: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        memo: Option<String>,
    },
}

impl Address {
    pub fn with_memo(address: impl Into<String>, memo: impl Into<String>) -> Self {
        Address::WithMemo {
            address: address.into(),
            memo: Some(memo.into()),
        }
    }

    /// 原始地址字符串
    pub fn address(&self) -> &str {
        match self {
            Address::Plain(address) => address,
            Address::WithMemo { address, .. } => address,
        }
    }

    /// 仅在调用方显式提供时存在
    pub fn memo(&self) -> Option<&str> {
        match self {
            Address::Plain(_) => None,
            Address::WithMemo { memo, .. } => memo.as_deref(),
        }
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Address::Plain(value.to_string())
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        Address::Plain(value)
    }
}

impl From<&Address> for Address {
    fn from(value: &Address) -> Self {
        value.clone()
    }
}

/// 链描述符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Chain {
    Name(String),
    Network {
        chain: String,
        #[serde(
            rename = "networkType",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        network_type: Option<NetworkType>,
    },
}

impl Chain {
    pub fn new(chain: impl Into<String>, network_type: NetworkType) -> Self {
        Chain::Network {
            chain: chain.into(),
            network_type: Some(network_type),
        }
    }

    pub fn testnet(chain: impl Into<String>) -> Self {
        Self::new(chain, NetworkType::TestNet)
    }

    pub fn name(&self) -> &str {
        match self {
            Chain::Name(name) => name,
            Chain::Network { chain, .. } => chain,
        }
    }

    /// 未指定时默认主网
    pub fn network_type(&self) -> NetworkType {
        match self {
            Chain::Name(_) => NetworkType::MainNet,
            Chain::Network { network_type, .. } => network_type.unwrap_or_default(),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Name(name) => f.write_str(name),
            Chain::Network { chain, .. } => write!(f, "{} ({})", chain, self.network_type()),
        }
    }
}

impl From<&str> for Chain {
    fn from(value: &str) -> Self {
        Chain::Name(value.to_string())
    }
}

impl From<String> for Chain {
    fn from(value: String) -> Self {
        Chain::Name(value)
    }
}

impl From<&Chain> for Chain {
    fn from(value: &Chain) -> Self {
        value.clone()
    }
}
