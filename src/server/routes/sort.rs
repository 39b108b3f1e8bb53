//! Batch sort endpoints
//!
//! `POST /process-single` sorts arrays one after another and keeps input order.
//! `POST /process-concurrent` sorts one array per unit of work; the order of
//! `sorted_arrays` follows unit completion and is not aligned with the input.
//!
//! Both report `time_ns`, which covers the sort call only, not JSON decoding
//! or encoding.

use crate::core::sorter::SortMode;
use crate::server::state::AppState;
use crate::server::types::{SortRequest, SortResponse};
use crate::utils::error::ServiceError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::{info, warn};

/// Path of the sequential endpoint
pub const PROCESS_SINGLE_PATH: &str = "/process-single";
/// Path of the concurrent endpoint
pub const PROCESS_CONCURRENT_PATH: &str = "/process-concurrent";

/// Configure sort routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(PROCESS_SINGLE_PATH, web::post().to(process_single))
        .route(PROCESS_CONCURRENT_PATH, web::post().to(process_concurrent));
}

/// Sequential sort endpoint
pub async fn process_single(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> ActixResult<HttpResponse> {
    process_and_respond(&state, &body, SortMode::Sequential).await
}

/// Concurrent sort endpoint
pub async fn process_concurrent(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> ActixResult<HttpResponse> {
    process_and_respond(&state, &body, SortMode::Concurrent).await
}

async fn process_and_respond(
    state: &AppState,
    body: &[u8],
    mode: SortMode,
) -> ActixResult<HttpResponse> {
    let request = decode_request(body)
        .inspect_err(|e| warn!(mode = %mode, error = %e, "Rejected sort request"))?;

    let batch = Arc::new(request.to_sort);
    let arrays = batch.len();

    let timed = state.sorter.sort_timed(mode, batch).await?;
    let response = SortResponse::from(timed);

    info!(mode = %mode, arrays, time_ns = response.time_ns, "Sorted batch");

    Ok(HttpResponse::Ok().json(response))
}

/// Decode a request body into a batch
///
/// Only the first JSON value in the body is read; anything after it is
/// ignored. An empty body is a decode error.
pub fn decode_request(body: &[u8]) -> Result<SortRequest, ServiceError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<SortRequest>()
        .next()
        .unwrap_or_else(|| Err(serde::de::Error::custom("request body is empty")))
        .map_err(ServiceError::from)
}
