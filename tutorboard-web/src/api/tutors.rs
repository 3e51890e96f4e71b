//! Tutor listing and profile endpoints

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tutorboard_core::matching::SortSelector;
use tutorboard_core::roster::Tutor;

use crate::api::ApiError;
use crate::AppState;

/// Query parameters for the random sample (index page)
#[derive(Debug, Deserialize)]
pub struct SampleQuery {
    /// Number of tutors to draw
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    6
}

/// Query parameters for the full listing (all page)
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Sort criterion: `price` or `rating`; anything else shuffles
    pub sort: Option<String>,
    /// Sort direction: `asc` or `desc`
    pub order: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TutorListResponse {
    pub count: usize,
    pub tutors: Vec<Tutor>,
}

#[derive(Debug, Serialize)]
pub struct GoalListingResponse {
    pub goal: String,
    pub label: String,
    pub count: usize,
    pub tutors: Vec<Tutor>,
}

/// GET /api/tutors?count=6
///
/// Random sample of distinct tutors for the index page. A count larger than
/// the roster is a 400, not a truncated result.
pub async fn sample_tutors(
    State(state): State<AppState>,
    Query(query): Query<SampleQuery>,
) -> Result<Json<TutorListResponse>, ApiError> {
    let tutors = state.board.sample_tutors(query.count)?;
    Ok(Json(TutorListResponse {
        count: tutors.len(),
        tutors,
    }))
}

/// GET /api/tutors/all?sort=price&order=asc
///
/// Full roster listing. Missing or unrecognized sort input yields a random
/// order, matching the free-form sort selector of the listing page.
pub async fn list_tutors(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<TutorListResponse> {
    let selector = SortSelector::parse(query.sort.as_deref(), query.order.as_deref());
    let tutors = state.board.sorted_tutors(selector);
    Json(TutorListResponse {
        count: tutors.len(),
        tutors,
    })
}

/// GET /api/goals/:goal/tutors
///
/// Tutors supporting a learning goal, roster order. Unknown goal code is a
/// 404; a known goal with no tutors is an empty listing.
pub async fn tutors_by_goal(
    State(state): State<AppState>,
    Path(goal): Path<String>,
) -> Result<Json<GoalListingResponse>, ApiError> {
    let (label, tutors) = state.board.tutors_by_goal(&goal)?;
    Ok(Json(GoalListingResponse {
        goal,
        label,
        count: tutors.len(),
        tutors,
    }))
}

/// GET /api/tutors/:id
///
/// Single tutor profile.
pub async fn tutor_profile(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Tutor>, ApiError> {
    Ok(Json(state.board.tutor(id)?))
}
