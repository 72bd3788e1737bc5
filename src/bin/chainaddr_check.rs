//! 命令行地址校验
//!
//! 用法：`chainaddr-check <chain> <address> [--testnet] [--memo <memo>] [--json]`
//! 退出码：0 有效，1 无效，2 参数或链解析错误

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use chainaddr::config::{Config, CONFIG_PATH_ENV};
use chainaddr::infrastructure::logging;
use chainaddr::{Address, Chain, ChainRegistry, NetworkType};

const USAGE: &str =
    "usage: chainaddr-check <chain> <address> [--testnet] [--memo <memo>] [--json]";

#[derive(Debug, PartialEq, Eq)]
struct CheckArgs {
    chain: String,
    address: String,
    network: NetworkType,
    memo: Option<String>,
    json: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CheckArgs> {
    let mut positional = Vec::new();
    let mut network = NetworkType::MainNet;
    let mut memo = None;
    let mut json = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--testnet" => network = NetworkType::TestNet,
            "--json" => json = true,
            "--memo" => {
                let Some(v) = args.next() else {
                    bail!("--memo requires a value");
                };
                memo = Some(v);
            }
            flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
            _ => positional.push(arg),
        }
    }

    let [chain, address]: [String; 2] = positional
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected exactly <chain> <address>"))?;

    Ok(CheckArgs {
        chain,
        address,
        network,
        memo,
        json,
    })
}

fn load_registry() -> Result<ChainRegistry> {
    let config_path = std::env::var(CONFIG_PATH_ENV).ok();
    let config = Config::from_env_and_file(config_path.as_deref())?;
    config.validate()?;

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {:#}", e);
    }

    ChainRegistry::builtin()
        .and_then(|registry| registry.with_extra_aliases(&config.aliases))
        .context("Failed to build chain registry")
}

fn run(args: CheckArgs) -> Result<bool> {
    let registry = load_registry()?;

    let chain = Chain::new(args.chain.clone(), args.network);
    let address = match &args.memo {
        Some(memo) => Address::with_memo(args.address.clone(), memo.clone()),
        None => Address::from(args.address.clone()),
    };

    let valid = registry.validate(&address, &chain)?;
    tracing::info!(chain = %chain, valid, "address checked");

    if args.json {
        let output = serde_json::json!({
            "chain": args.chain,
            "networkType": args.network,
            "address": args.address,
            "memo": args.memo,
            "valid": valid,
        });
        println!("{output}");
    } else {
        println!("{valid}");
    }

    Ok(valid)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
