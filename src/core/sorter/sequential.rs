//! Sequential batch sorting

use super::types::{Batch, SortedBatch};
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use tracing::error;

/// Copy an array and sort the copy ascending
#[inline]
pub fn sort_array(array: &[i64]) -> Vec<i64> {
    let mut sorted = array.to_vec();
    // Plain integers carry no payload, so stability is irrelevant.
    sorted.sort_unstable();
    sorted
}

/// Sort every array of a batch in input order
///
/// Output index `i` is the sorted copy of `batch[i]`.
pub fn sort_sequentially(batch: &[Vec<i64>]) -> SortedBatch {
    batch.iter().map(|array| sort_array(array)).collect()
}

/// Sort a batch in input order on the blocking pool
///
/// The whole batch is one blocking task, so a large batch never holds up the
/// async worker that received the request.
pub async fn sort_sequentially_blocking(batch: Arc<Batch>) -> Result<SortedBatch> {
    run_blocking(move || sort_sequentially(&batch)).await
}

/// Run a sequential sort closure on the blocking pool
///
/// A panic inside `work` surfaces as [`ServiceError::SortUnit`].
pub(crate) async fn run_blocking<F>(work: F) -> Result<SortedBatch>
where
    F: FnOnce() -> SortedBatch + Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        error!(error = %e, "Sequential sort failed");
        ServiceError::sort_unit(format!("sequential sort failed: {}", e))
    })
}
