//! # REST API Errors
//!
//! Error taxonomy for the book API and its mapping to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::model::ValidationError;
use crate::repository::RepoError;

use super::response::MessageResponse;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Book API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No record resolves to the requested id.
    #[error("Book not found")]
    NotFound,

    /// The list operation found zero rows. Treated as a client-visible
    /// 404 rather than an empty 200; a policy choice preserved from the
    /// original API contract.
    #[error("No books found")]
    NoBooksFound,

    /// Request body failed shape validation. Carries per-field detail.
    #[error("{0}")]
    Validation(ValidationError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage-layer failure. The detail is logged, never sent to the
    /// client.
    #[error("internal error: {0}")]
    Internal(#[from] RepoError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::NoBooksFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // Field-keyed error map, e.g. {"author_name": ["This field is required."]}
            ApiError::Validation(errors) => (status, Json(errors)).into_response(),
            ApiError::Internal(err) => {
                error!(error = %err, "storage operation failed");
                (status, Json(MessageResponse::new("Internal server error"))).into_response()
            }
            other => (status, Json(MessageResponse::new(other.to_string()))).into_response(),
        }
    }
}
