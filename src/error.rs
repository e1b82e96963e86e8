//! Application error type and its HTTP mapping.
//!
//! Every layer returns [`AppError`]; handlers convert it into a plain-text
//! response with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors surfaced to HTTP clients.
///
/// The `Display` text of each variant is sent verbatim as the response body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Invalid or missing request input (400).
    #[error("{0}")]
    Validation(String),

    /// The requested short key does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// Storage or other server-side failure (500).
    ///
    /// Carries the raw error text of the underlying failure.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status, "{}", self);
        } else {
            tracing::debug!(status = %status, "{}", self);
        }

        (status, self.to_string()).into_response()
    }
}
