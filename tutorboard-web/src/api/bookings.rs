//! Booking slot resolution and booking submission endpoints

use axum::extract::{Path, State};
use axum::Json;
use tutorboard_core::service::{BookingReceipt, Submission};
use tutorboard_core::slots::BookingSlot;
use tutorboard_core::validate::BookingInput;

use crate::api::ApiError;
use crate::AppState;

/// GET /api/booking/:id/:day/:time
///
/// Resolve a requested slot for the confirmation view. Read-only; nothing is
/// persisted until the client posts the confirmed booking back.
pub async fn resolve_booking_slot(
    State(state): State<AppState>,
    Path((id, day, time)): Path<(u32, String, String)>,
) -> Result<Json<BookingSlot>, ApiError> {
    let slot = state.board.resolve_booking_slot(id, &day, &time)?;
    Ok(Json(slot))
}

/// POST /api/booking
///
/// Persist a confirmed booking. Field failures come back as a 422 error map;
/// an unresolvable tutor or weekday reference is a 404 and nothing is stored.
pub async fn submit_booking(
    State(state): State<AppState>,
    Json(input): Json<BookingInput>,
) -> Result<Json<BookingReceipt>, ApiError> {
    match state.board.submit_booking(input).await? {
        Submission::Accepted(receipt) => Ok(Json(receipt)),
        Submission::Rejected(errors) => Err(errors.into()),
    }
}
