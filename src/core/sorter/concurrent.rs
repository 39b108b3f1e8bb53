//! Concurrent batch sorting
//!
//! Fans out one blocking unit of work per array onto the runtime's blocking
//! pool, lets each unit append its sorted copy to a [`ResultCollector`], and
//! joins all units before handing back the collected arrays.

use super::collector::ResultCollector;
use super::sequential::sort_array;
use super::types::{Batch, SortedBatch};
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error};

/// Per-array fan-out/fan-in sorter
///
/// By default every array gets its own unit with no limit on how many run at
/// once. Setting `max_concurrency` bounds in-flight units with a semaphore;
/// output semantics are unchanged.
///
/// Output order is the order in which units finished their append and is
/// not aligned with the input.
///
/// Once dispatched, a unit runs to completion even if the caller stops
/// waiting (for example when the client disconnects). In bounded mode, units
/// still waiting for a permit at that point are never dispatched.
#[derive(Debug, Clone, Default)]
pub struct ConcurrentSorter {
    max_concurrency: Option<usize>,
}

impl ConcurrentSorter {
    /// Create a sorter, optionally bounding in-flight units
    pub fn new(max_concurrency: Option<usize>) -> Self {
        Self {
            max_concurrency: max_concurrency.map(|limit| limit.max(1)),
        }
    }

    /// Create a sorter with unbounded fan-out
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Limit on concurrently running units, if any
    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    /// Sort every array of `batch` concurrently
    ///
    /// A failing unit is fatal for the batch: all units are still joined, then
    /// a single [`ServiceError::SortUnit`] reports how many failed.
    pub async fn sort(&self, batch: Arc<Batch>) -> Result<SortedBatch> {
        self.sort_with(batch, sort_array).await
    }

    /// Run `unit` over every array of `batch` with fan-out and join
    pub(crate) async fn sort_with<F>(&self, batch: Arc<Batch>, unit: F) -> Result<SortedBatch>
    where
        F: Fn(&[i64]) -> Vec<i64> + Send + Sync + 'static,
    {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let dispatched = batch.len();
        let collector = ResultCollector::with_capacity(dispatched);
        let limiter = self
            .max_concurrency
            .map(|permits| Arc::new(Semaphore::new(permits)));
        let unit = Arc::new(unit);
        let mut units = DispatchedUnits::default();

        for index in 0..dispatched {
            let permit = match &limiter {
                Some(semaphore) => Some(
                    Arc::clone(semaphore)
                        .acquire_owned()
                        .await
                        .map_err(|_| ServiceError::internal("Sort unit limiter closed"))?,
                ),
                None => None,
            };

            let batch = Arc::clone(&batch);
            let sink = collector.clone();
            let unit = Arc::clone(&unit);

            units.0.spawn_blocking(move || {
                let _permit = permit;
                let sorted = unit(batch[index].as_slice());
                sink.push(sorted);
            });
        }

        let mut failures = 0usize;
        let mut first_failure: Option<String> = None;

        while let Some(joined) = units.0.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "Sort unit failed");
                failures += 1;
                if first_failure.is_none() {
                    first_failure = Some(e.to_string());
                }
            }
        }

        if let Some(reason) = first_failure {
            return Err(ServiceError::sort_unit(format!(
                "{} of {} sort units failed: {}",
                failures, dispatched, reason
            )));
        }

        debug!(units = dispatched, "All sort units joined");
        Ok(collector.into_sorted_batch())
    }
}

/// Units spawned for one batch
///
/// Dropping a bare `JoinSet` aborts units that have not started yet; this
/// detaches them instead so every dispatched unit finishes.
#[derive(Default)]
struct DispatchedUnits(JoinSet<()>);

impl Drop for DispatchedUnits {
    fn drop(&mut self) {
        self.0.detach_all();
    }
}
