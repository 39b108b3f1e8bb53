//! Timed sort results

use super::types::SortedBatch;
use std::time::Duration;

/// A sorted batch with the time spent producing it
#[derive(Debug, Clone)]
pub struct TimedSort {
    /// Sorted arrays
    pub sorted: SortedBatch,
    /// Wall-clock time of the sort call only
    pub elapsed: Duration,
}

impl TimedSort {
    pub fn new(sorted: SortedBatch, elapsed: Duration) -> Self {
        Self { sorted, elapsed }
    }

    /// Elapsed time in nanoseconds, saturating at `i64::MAX`
    pub fn elapsed_ns(&self) -> i64 {
        i64::try_from(self.elapsed.as_nanos()).unwrap_or(i64::MAX)
    }
}
