//! # HTTP Handlers
//!
//! ## Request Flow
//! ```text
//! POST /receipts/process
//!   bytes ──► parse_receipt ──► ids.generate ──► store.put ──► {"id"}
//!
//! GET /receipts/{id}/points
//!   id ──► validate_receipt_id ──► store.get ──► calculate_points ──► {"points"}
//! ```

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tally_core::{parse_receipt, validate_receipt_id, CoreError, PointsBreakdown};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Text served at `/`.
pub const LANDING_TEXT: &str = "Receipt Processor Application";

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: Uuid,
}

/// Body of a successful `GET /receipts/{id}/points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Landing route.
pub async fn home() -> &'static str {
    LANDING_TEXT
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    "OK"
}

/// Validates and stores a submitted receipt.
///
/// The body is decoded here rather than through the `Json` extractor so that
/// malformed JSON gets the same 400 response as any other invalid receipt.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ProcessResponse>> {
    let receipt = parse_receipt(&body)?;

    let id = state.ids.generate();
    state.store.put(id, receipt)?;

    info!(%id, "Receipt accepted");
    Ok(Json(ProcessResponse { id }))
}

/// Scores a stored receipt.
pub async fn receipt_points(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let id = validate_receipt_id(&raw_id).map_err(CoreError::InvalidIdentifier)?;

    let receipt = state
        .store
        .get(&id)?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;

    let breakdown = PointsBreakdown::for_receipt(&receipt);
    let points = breakdown.total();
    debug!(%id, ?breakdown, points, "Points calculated");

    Ok(Json(PointsResponse { points }))
}
