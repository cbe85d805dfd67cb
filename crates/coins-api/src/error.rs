//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every failed request produces exactly one JSON envelope:
//!
//! ```json
//! {"StatusCode": 400, "Message": "Invalid username or token."}
//! ```
//!
//! Missing and wrong credentials share one status and message so callers
//! cannot tell which check failed. Internal failures are logged with full
//! detail and reported with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use coins_store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for every authorization failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Invalid username or token.";

/// Message returned for every internal failure.
pub const INTERNAL_MESSAGE: &str = "An Unexpected Error Occured.";

/// Message returned when an authorized user has no balance record.
pub const NOT_FOUND_MESSAGE: &str = "No balance found for user.";

/// JSON error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    /// Mirrors the HTTP status code.
    pub status_code: u16,
    /// Human-readable message. Never carries internal detail.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// `username` or `Authorization` absent or empty (400).
    #[error("missing username or authorization token")]
    MissingCredentials,

    /// No credential for the user, or the token does not match (400).
    #[error("invalid credentials for user '{0}'")]
    InvalidCredentials(String),

    /// Authorized user has no balance record (404).
    #[error("no balance record for user '{0}'")]
    RecordNotFound(String),

    /// Query parameters could not be decoded (500).
    #[error("failed to decode query parameters: {0}")]
    DecodeFailure(String),

    /// The store failed to answer (500).
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl AppError {
    /// Return the HTTP status code and client-facing message for this error.
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Self::MissingCredentials | Self::InvalidCredentials(_) => {
                (StatusCode::BAD_REQUEST, UNAUTHORIZED_MESSAGE)
            }
            Self::RecordNotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            Self::DecodeFailure(_) | Self::StoreUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
            }
        }
    }

    /// Whether this error is an internal failure rather than a client error.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::DecodeFailure(_) | Self::StoreUnavailable(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if self.is_internal() {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorResponse {
            status_code: status.as_u16(),
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}

/// A store lookup task that panicked or was cancelled.
impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::StoreUnavailable(format!("store lookup task failed: {err}"))
    }
}
