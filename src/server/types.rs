//! Request and response bodies for the sort routes

use crate::core::sorter::{Batch, SortedBatch, TimedSort};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Name of the request field holding the batch
pub const TO_SORT_FIELD: &str = "to_sort";

/// Body of `POST /process-single` and `POST /process-concurrent`
///
/// Decoding is lenient in the same places JSON clients usually expect:
/// the `to_sort` key matches regardless of ASCII case, unknown keys are
/// skipped, and a missing key, a `null` value or a top-level `null` body all
/// mean an empty batch. If the key appears more than once the last one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortRequest {
    /// Arrays to sort
    pub to_sort: Batch,
}

impl<'de> Deserialize<'de> for SortRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(SortRequestVisitor)
    }
}

struct SortRequestVisitor;

impl<'de> Visitor<'de> for SortRequestVisitor {
    type Value = SortRequest;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "an object with a `{}` field", TO_SORT_FIELD)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SortRequest::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SortRequest::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = SortRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(TO_SORT_FIELD) {
                request.to_sort = map.next_value::<Option<Batch>>()?.unwrap_or_default();
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(request)
    }
}

/// Successful response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortResponse {
    /// Sorted arrays
    pub sorted_arrays: SortedBatch,
    /// Time spent sorting, in nanoseconds
    pub time_ns: i64,
}

impl From<TimedSort> for SortResponse {
    fn from(timed: TimedSort) -> Self {
        let time_ns = timed.elapsed_ns();
        Self {
            sorted_arrays: timed.sorted,
            time_ns,
        }
    }
}
