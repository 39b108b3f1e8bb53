//! # batchsort
//!
//! A small HTTP service that sorts batches of integer arrays.
//!
//! Two endpoints accept the same body, `{"to_sort": [[int, ...], ...]}`:
//!
//! - `POST /process-single` sorts the arrays one after another. Output index
//!   `i` is the sorted copy of input index `i`.
//! - `POST /process-concurrent` dispatches one unit of work per array and
//!   joins them all before responding. Output order follows completion order.
//!
//! Both respond with `{"sorted_arrays": [...], "time_ns": n}` where `time_ns`
//! covers the sort call only. An undecodable body gets HTTP 400 with the
//! plain-text body `Invalid JSON`.
//!
//! ## Library use
//!
//! ```rust,no_run
//! use batchsort::core::sorter::{BatchSorter, SortMode};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> batchsort::Result<()> {
//!     let sorter = BatchSorter::default();
//!     let batch = Arc::new(vec![vec![3, 1, 2], vec![5, 4]]);
//!     let timed = sorter.sort_timed(SortMode::Concurrent, batch).await?;
//!     println!("{:?} in {} ns", timed.sorted, timed.elapsed_ns());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use self::core::sorter::{BatchSorter, SortMode};
pub use utils::error::{Result, ServiceError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Service build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the Unix epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build metadata recorded at compile time
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
