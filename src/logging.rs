//! Tracing subscriber setup
//!
//! Logs are written to stderr so recommendation output on stdout stays
//! machine readable.

use crate::config::LoggingConfig;
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter directive for the given settings. `RUST_LOG` wins when set;
/// `verbose` forces debug output for this crate.
#[must_use]
pub fn filter_directive(config: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        format!("{},travel_assistant=debug", config.level)
    } else {
        config.level.clone()
    }
}

/// Install the global subscriber. Call once, from the binary.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(config, verbose)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
