//! Batch sorting types

use std::fmt;

/// Arrays submitted in one request
pub type Batch = Vec<Vec<i64>>;

/// Sorted arrays produced for one request
pub type SortedBatch = Vec<Vec<i64>>;

/// Execution strategy for a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// One array after another, output index-aligned with input
    Sequential,
    /// One unit of work per array, output in completion order
    Concurrent,
}

impl SortMode {
    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Sequential => "sequential",
            SortMode::Concurrent => "concurrent",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
