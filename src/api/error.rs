//! Error mapping for the HTTP API.

use crate::error::TubesumError;
use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;
use thiserror::Error;

/// Minimum length, in characters, of video identifiers and free text.
pub const MIN_INPUT_CHARS: usize = 5;

/// Outcome of a failed request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Input rejected before any provider was called.
    #[error("{0}")]
    Validation(String),

    /// The provider succeeded but produced nothing.
    #[error("{0}")]
    NotFound(String),

    /// Any provider or configuration failure. Reported verbatim.
    #[error("{0}")]
    Upstream(#[from] TubesumError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Require a parameter to be present and at least [`MIN_INPUT_CHARS`] long.
pub fn require_min_length(field: &str, value: Option<String>) -> Result<String, ApiError> {
    let value = value
        .ok_or_else(|| ApiError::Validation(format!("Missing required parameter: {}", field)))?;

    if value.chars().count() < MIN_INPUT_CHARS {
        return Err(ApiError::Validation(format!(
            "{} must be at least {} characters long",
            field, MIN_INPUT_CHARS
        )));
    }

    Ok(value)
}
