//! Mapping of core errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;
use tutorboard_core::validate::FieldErrors;
use tutorboard_core::Error;

/// Error envelope returned by every handler.
#[derive(Debug)]
pub enum ApiError {
    /// Engine-level failure, mapped by taxonomy
    Core(Error),
    /// Client input failed field validation; recoverable, client re-prompts
    Fields(FieldErrors),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Core(err)
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Fields(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Fields(errors) => {
                let body = Json(json!({ "errors": errors }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            ApiError::Core(err) => {
                let status = match &err {
                    Error::NotFound(_) => StatusCode::NOT_FOUND,
                    Error::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                    // Storage and corruption failures are service-level: the
                    // client must never see a success for these.
                    Error::Io(_)
                    | Error::Corrupt { .. }
                    | Error::Config(_)
                    | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    error!("request failed: {}", err);
                }
                let body = Json(json!({ "error": err.to_string() }));
                (status, body).into_response()
            }
        }
    }
}
