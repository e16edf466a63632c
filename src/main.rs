use std::io::{self, BufRead};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use logmate::config::{config_file_path, LoggerConfig};
use logmate::logging::Logger;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is the logger's console sink.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("logmate=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let config = LoggerConfig::load()?;
    tracing::info!(
        "Config: {} (logging to {})",
        config_file_path().display(),
        config.destination.display()
    );

    let logger = Logger::from_config(&config);

    // Each stdin line becomes one INFO message.
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        logger.info(&line);
    }

    Ok(())
}
