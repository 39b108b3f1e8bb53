//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::sorter::BatchSorter;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Holds read-only configuration and the batch sorter. Nothing here is
/// mutated by requests; every batch lives only for its own request.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Batch sorter used by both sort routes
    pub sorter: Arc<BatchSorter>,
}

impl AppState {
    /// Create a new AppState from configuration
    pub fn new(config: Config) -> Self {
        let sorter = BatchSorter::new(config.sorter());
        Self {
            config: Arc::new(config),
            sorter: Arc::new(sorter),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
