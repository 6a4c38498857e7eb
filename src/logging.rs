//! Tracing subscriber setup for the `journal-map` binary

use crate::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the level filter; `RUST_LOG` wins over the configured level
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(config: &LoggingConfig) {
    let filter = env_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
