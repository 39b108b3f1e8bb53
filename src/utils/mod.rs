//! Utility modules for the sort service
//!
//! - **error**: Error type and HTTP rendering
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;
