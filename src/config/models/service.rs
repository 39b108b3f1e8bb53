//! Top-level service configuration

use super::*;
use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "BATCHSORT_";

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Batch sorter configuration
    #[serde(default)]
    pub sorter: SorterConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Apply `BATCHSORT_*` overrides read through `lookup`
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(host) = var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("PORT") {
            self.server.port = parse_env("PORT", &port)?;
        }
        if let Some(workers) = var("WORKERS") {
            self.server.workers = Some(parse_env("WORKERS", &workers)?);
        }
        if let Some(limit) = var("MAX_BODY_SIZE") {
            self.server.max_body_size = Some(parse_env("MAX_BODY_SIZE", &limit)?);
        }
        if let Some(limit) = var("MAX_CONCURRENCY") {
            self.sorter.max_concurrency = Some(parse_env("MAX_CONCURRENCY", &limit)?);
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("LOG_FORMAT") {
            self.logging.format = parse_env("LOG_FORMAT", &format)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.server.validate()?;
        self.sorter.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn parse_env<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| {
        ServiceError::config(format!("Invalid {}{}={:?}: {}", ENV_PREFIX, name, value, e))
    })
}
