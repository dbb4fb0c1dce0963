//! Error types for the analysis service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Analysis Error Enum ==
/// Unified error type for the analysis service.
///
/// A cache miss is never an error; it is reported as `None` by the cache.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Request body is missing a required field or is otherwise unusable
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A metric range with `min >= max` (or an empty choice list) was used
    #[error("Invalid metric range: [{min}, {max})")]
    InvalidRange { min: String, max: String },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Internal(format!("report serialization failed: {}", err))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match &self {
            AnalysisError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AnalysisError::InvalidRange { .. } | AnalysisError::Internal(_) => {
                // Programming errors: report and fail the request, never retry.
                error!("request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the analysis service.
pub type Result<T> = std::result::Result<T, AnalysisError>;
