//! Error handling for the sort service
//!
//! This module defines the error type shared by the sorter, the configuration
//! layer and the HTTP server, plus its HTTP rendering.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse, INVALID_JSON_BODY};
pub use types::{Result, ServiceError};
