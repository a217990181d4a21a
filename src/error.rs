/// Error taxonomy, translated to HTTP at the operation boundary
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Covers both "no such user" and "wrong password" so login failures
    /// cannot be used for account enumeration.
    #[error("invalid credentials")]
    InvalidCredential,

    #[error("authentication required")]
    Unauthenticated,

    #[error("forbidden")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    DuplicateAction(&'static str),

    #[error("{0}")]
    InvalidState(&'static str),

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("internal server error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::InvalidCredential => (
                StatusCode::BAD_REQUEST,
                "invalid email or password".to_string(),
            ),
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "authentication required".to_string(),
            ),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "not allowed".to_string()),
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            ApiError::DuplicateAction(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            ApiError::InvalidState(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            ApiError::StoreUnavailable(err) => {
                // Surfaced to the caller, never retried here. Log carries no
                // credentials or tokens.
                tracing::error!(error = %err, "document store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "store unavailable".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}
