//! tutorboard-web library - HTTP boundary over the TutorBoard engine
//!
//! Thin JSON API; all matching, validation and persistence logic lives in
//! `tutorboard-core`.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tutorboard_core::TutorBoard;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The matching and booking engine
    pub board: Arc<TutorBoard>,
}

impl AppState {
    pub fn new(board: Arc<TutorBoard>) -> Self {
        Self { board }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/tutors", get(api::sample_tutors))
        .route("/api/tutors/all", get(api::list_tutors))
        .route("/api/tutors/:id", get(api::tutor_profile))
        .route("/api/goals/:goal/tutors", get(api::tutors_by_goal))
        .route("/api/booking/:id/:day/:time", get(api::resolve_booking_slot))
        .route("/api/booking", post(api::submit_booking))
        .route("/api/request", post(api::submit_request))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
