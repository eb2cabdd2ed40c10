use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use tracing_subscriber::filter::LevelFilter as TracingLevel;

use crate::config::AppConfig;

const FILE_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%S%.fZ)(utc)}::{l}::{t}::{m}{n}";

/// Routes `log` records to stdout through tracing-subscriber, or to
/// `LOG_FILE` through log4rs when one is configured.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    match &config.log_file {
        Some(path) => init_file_logging(path, parse_level(&config.log_level)),
        None => tracing_subscriber::fmt()
            .with_max_level(
                config
                    .log_level
                    .parse::<TracingLevel>()
                    .unwrap_or(TracingLevel::INFO),
            )
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e)),
    }
}

fn init_file_logging(path: &str, level: LevelFilter) -> Result<()> {
    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(path)
        .with_context(|| format!("failed to open log file {}", path))?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(level))
        .context("invalid log4rs configuration")?;

    log4rs::init_config(config).context("a logger is already installed")?;
    Ok(())
}

pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}
