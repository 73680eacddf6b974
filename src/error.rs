use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure of a single loop generation. The engine reports these and nothing
/// else; it never retries and never logs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoopError {
    /// Rejected before any geodesic work was done
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A geodesic step had no defined result for these inputs
    #[error("Loop generation failed: {0}")]
    Generation(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Loop(#[from] LoopError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Loop(LoopError::InvalidInput(ref e)) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::Loop(LoopError::Generation(ref e)) => {
                tracing::warn!("Loop generation failed: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, e.as_str())
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
