//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured level when it is set.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{Result, ServiceError};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// Build the level filter for a logging configuration
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&config.level))
}

/// Filter used when `RUST_LOG` is not set
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "batchsort={level},actix_web={level},actix_server=info",
        level = level.to_ascii_lowercase()
    ))
}

/// Install a thread-local subscriber for startup, before configuration is known
///
/// Uses the default logging configuration. The global subscriber from
/// [`init_logging`] takes over once the returned guard is dropped.
pub fn bootstrap_logging() -> DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&LoggingConfig::default()))
        .with_target(false)
        .finish();

    tracing::subscriber::set_default(subscriber)
}

/// Install the global tracing subscriber
///
/// Fails if a subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| ServiceError::internal(format!("Failed to initialize logging: {}", e)))
}
