//! Consultation request submission endpoint

use axum::extract::State;
use axum::Json;
use tutorboard_core::service::{RequestReceipt, Submission};
use tutorboard_core::validate::RequestInput;

use crate::api::ApiError;
use crate::AppState;

/// POST /api/request
///
/// Persist an open consultation request. Field failures come back as a 422
/// error map; a store failure is a 500 and the client is never shown a
/// success confirmation for an unpersisted submission.
pub async fn submit_request(
    State(state): State<AppState>,
    Json(input): Json<RequestInput>,
) -> Result<Json<RequestReceipt>, ApiError> {
    match state.board.submit_request(input).await? {
        Submission::Accepted(receipt) => Ok(Json(receipt)),
        Submission::Rejected(errors) => Err(errors.into()),
    }
}
