//! Batch sorting
//!
//! A batch is an ordered list of integer arrays. It can be sorted in two modes:
//!
//! - [`SortMode::Sequential`]: arrays are copied and sorted one after another
//!   in a single blocking task; output index `i` is the sorted copy of input
//!   index `i`.
//! - [`SortMode::Concurrent`]: one unit of work per array copies and sorts it,
//!   then appends the result to a shared [`ResultCollector`]. The caller waits
//!   for every unit before returning. Output order follows completion order and
//!   is not aligned with the input.
//!
//! Both modes always copy before sorting, so the caller's batch is never mutated.

mod collector;
mod concurrent;
mod sequential;
mod timing;
mod types;

pub use collector::ResultCollector;
pub use concurrent::ConcurrentSorter;
pub use sequential::{sort_array, sort_sequentially, sort_sequentially_blocking};
pub use timing::TimedSort;
pub use types::{Batch, SortMode, SortedBatch};

use crate::config::SorterConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Entry point used by the HTTP layer to sort a batch in either mode
#[derive(Debug, Clone, Default)]
pub struct BatchSorter {
    concurrent: ConcurrentSorter,
}

impl BatchSorter {
    /// Create a batch sorter from configuration
    pub fn new(config: &SorterConfig) -> Self {
        Self {
            concurrent: ConcurrentSorter::new(config.max_concurrency),
        }
    }

    /// Sort a batch in the requested mode
    pub async fn sort(&self, mode: SortMode, batch: Arc<Batch>) -> Result<SortedBatch> {
        match mode {
            SortMode::Sequential => sort_sequentially_blocking(batch).await,
            SortMode::Concurrent => self.concurrent.sort(batch).await,
        }
    }

    /// Sort a batch and measure the wall-clock time spent in the sort alone
    pub async fn sort_timed(&self, mode: SortMode, batch: Arc<Batch>) -> Result<TimedSort> {
        let arrays = batch.len();
        let start = Instant::now();
        let sorted = self.sort(mode, batch).await?;
        let timed = TimedSort::new(sorted, start.elapsed());

        debug!(mode = %mode, arrays, elapsed_ns = timed.elapsed_ns(), "Batch sorted");
        Ok(timed)
    }
}
