//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

pub mod logging;
pub mod server;
pub mod service;
pub mod sorter;

// Re-export all configuration types
pub use logging::*;
pub use server::*;
pub use service::*;
pub use sorter::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
