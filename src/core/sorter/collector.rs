//! Shared result collection for concurrent sorting

use super::types::SortedBatch;
use parking_lot::Mutex;
use std::sync::Arc;

/// Append-only collection shared between concurrent sort units
///
/// Each unit holds its own clone and calls [`ResultCollector::push`] exactly
/// once with a finished array. Appends are serialized by the inner mutex; no
/// unit ever holds the lock while sorting.
#[derive(Debug, Clone, Default)]
pub struct ResultCollector {
    inner: Arc<Mutex<SortedBatch>>,
}

impl ResultCollector {
    /// Create a collector sized for `capacity` arrays
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::with_capacity(capacity))),
        }
    }

    /// Append one sorted array
    pub fn push(&self, sorted: Vec<i64>) {
        self.inner.lock().push(sorted);
    }

    /// Take the collected arrays
    ///
    /// Called after the join, when this is normally the last handle. If some
    /// other clone is still alive the contents are moved out under the lock.
    pub fn into_sorted_batch(self) -> SortedBatch {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner(),
            Err(shared) => std::mem::take(&mut *shared.lock()),
        }
    }
}
