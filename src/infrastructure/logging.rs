//! 日志系统配置模块
//! 支持结构化日志和日志级别配置，输出到 stderr（stdout 留给验证结果）

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::config::LoggingConfig;

/// 构建过滤器：`RUST_LOG` 优先，其次为配置中的级别
fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// 按配置组装 subscriber，不安装
fn build_subscriber(config: &LoggingConfig) -> Box<dyn Subscriber + Send + Sync> {
    let registry = Registry::default().with(build_filter(config));

    // 根据配置选择日志格式
    if config.format == "json" {
        Box::new(registry.with(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        Box::new(
            registry.with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            ),
        )
    }
}

/// 初始化日志系统（全局只能安装一次）
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    tracing::subscriber::set_global_default(build_subscriber(config))
        .with_context(|| format!("Failed to install {} log subscriber", config.format))
}

/// 简化初始化（使用默认配置）
pub fn init_default_logging() {
    let config = LoggingConfig::default();
    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to initialize logging: {:#}", e);
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    fn logging(level: &str, format: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format: format.to_string(),
        }
    }

    #[test]
    fn test_filter_uses_configured_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let filter = build_filter(&logging("warn", "text"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_subscribers_are_scoped() {
        // 只在当前作用域内生效，不污染其他测试
        for format in ["json", "text"] {
            let subscriber = build_subscriber(&logging("error", format));
            tracing::subscriber::with_default(subscriber, || {
                tracing::debug!(format, "filtered out at error level");
            });
        }
        assert!(!tracing::dispatcher::has_been_set());
    }
}
