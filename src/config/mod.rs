//! Configuration management for the service
//!
//! Configuration is layered: built-in defaults, then an optional YAML file,
//! then `BATCHSORT_*` environment variables. Command-line flags are applied
//! on top by the binary.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServiceError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// A file that cannot be read is reported as [`ServiceError::Io`]; a file
    /// that reads but does not parse or validate is [`ServiceError::Config`].
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let service: ServiceConfig = serde_yaml::from_str(content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };
        config.validate()?;
        Ok(config)
    }

    /// Apply process environment overrides to this configuration
    pub fn with_env(self) -> Result<Self> {
        let service = self.service.apply_env(|key| std::env::var(key).ok())?;
        let config = Self { service };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get sorter configuration
    pub fn sorter(&self) -> &SorterConfig {
        &self.service.sorter
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .validate()
            .map_err(|e| ServiceError::Config(format!("Invalid configuration: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
