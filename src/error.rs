// SPDX-License-Identifier: MIT

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Consent is required")]
    MissingConsent,

    #[error("Invalid or expired access token")]
    InvalidToken,

    #[error("Ebook file not found: {0}")]
    EbookMissing(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body, shared shape with success responses.
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingField(_) | AppError::InvalidEmail | AppError::MissingConsent => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            // One collapsed message for every verification failure so callers
            // cannot probe why a token was rejected.
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired access token".to_string(),
            ),
            AppError::EbookMissing(path) => {
                tracing::error!(path = %path, "Ebook file missing from deployment");
                (StatusCode::NOT_FOUND, "Ebook file not found".to_string())
            }
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred. Please try again.".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred. Please try again.".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
