//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::directory::DirectoryError;
use crate::sharepoint::SharePointError;

/// Application-level error type for the directory service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Directory aggregation failed.
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// SharePoint API operation failed.
    #[error("SharePoint error: {0}")]
    SharePoint(#[from] SharePointError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every variant is a server-side failure; capture them all
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        let status = match &self {
            Self::Directory(_) | Self::SharePoint(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose upstream error details to clients
        let message = match &self {
            Self::Directory(_) | Self::SharePoint(_) => "External service error".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
