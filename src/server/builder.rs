//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for layered configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, ServiceError};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default configuration file, used when none is given explicitly
pub const DEFAULT_CONFIG_PATH: &str = "config/batchsort.yaml";

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::Config("Configuration is required".to_string()))?;

        config.validate()?;
        Ok(HttpServer::new(&config))
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from file and environment
///
/// Reads `path`, or [`DEFAULT_CONFIG_PATH`] when none is given. A file that
/// cannot be read is logged and the built-in defaults are used instead; a
/// file that reads but is invalid fails startup.
pub async fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = match Config::from_file(&path).await {
        Ok(config) => {
            info!("Configuration file loaded: {}", path.display());
            config
        }
        Err(ServiceError::Io(e)) => {
            warn!(
                "Configuration file {} could not be read, using defaults: {}",
                path.display(),
                e
            );
            Config::default()
        }
        Err(e) => return Err(e),
    };

    config.with_env()
}

/// Build and run the server with a fully resolved configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!(
        version = crate::VERSION,
        "Starting batchsort on http://{}",
        config.server().address()
    );

    match config.sorter().max_concurrency {
        Some(limit) => info!(limit, "Concurrent sort units are bounded"),
        None => info!("Concurrent sort units are unbounded: one per array"),
    }

    info!("API Endpoints:");
    info!("   POST /process-single     - Sort arrays sequentially");
    info!("   POST /process-concurrent - Sort arrays concurrently (output order unspecified)");

    let server = ServerBuilder::new().with_config(config).build()?;
    server.start().await
}
