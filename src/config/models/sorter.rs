//! Batch sorter configuration

use serde::{Deserialize, Serialize};

/// Batch sorter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SorterConfig {
    /// Upper bound on concurrently running sort units.
    ///
    /// Unset means one unit per array with no bound, however large the batch.
    #[serde(default)]
    pub max_concurrency: Option<usize>,
}

impl SorterConfig {
    /// Validate sorter configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_concurrency == Some(0) {
            return Err("Max concurrency cannot be 0".to_string());
        }
        Ok(())
    }
}
