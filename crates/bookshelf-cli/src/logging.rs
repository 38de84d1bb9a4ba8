use anyhow::Result;

use crate::config::{LogLevel, LoggingConfig};

/// Install twyg as the global logger.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let opts = twyg::OptsBuilder::new()
        .coloured(config.coloured)
        .level(twyg_level(config.level))
        .report_caller(config.report_caller)
        .build()
        .map_err(|e| anyhow::anyhow!("invalid logging options: {:?}", e))?;

    twyg::setup(opts).map_err(|e| anyhow::anyhow!("could not set up logging: {:?}", e))?;
    log::debug!("logging initialised at {}", config.level);
    Ok(())
}

fn twyg_level(level: LogLevel) -> twyg::LogLevel {
    match level {
        LogLevel::Trace => twyg::LogLevel::Trace,
        LogLevel::Debug => twyg::LogLevel::Debug,
        LogLevel::Info => twyg::LogLevel::Info,
        LogLevel::Warn => twyg::LogLevel::Warn,
        LogLevel::Error => twyg::LogLevel::Error,
    }
}
