//! Centralized error handling.
//!
//! Every failure in the service is an [`AppError`]. Each variant belongs to
//! an [`ErrorKind`], and the HTTP layer picks the status code from the kind
//! rather than from message text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Authentication and authorization failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// Token missing, malformed, badly signed or expired
    #[error("invalid token")]
    InvalidToken,

    /// Token subject does not resolve, or does not own the resource
    #[error("permission denied")]
    PermissionDenied,

    /// Login with an unknown number or a wrong password
    #[error("unable to login, verify credentials")]
    InvalidCredentials,
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error")]
    Persistence(#[from] sea_orm::DbErr),

    #[error("{0}")]
    Auth(#[from] AuthFailure),

    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Internal server error")]
    Internal(String),

    /// Request exceeded the configured deadline
    #[error("request timed out")]
    Timeout,
}

/// Coarse classification of an [`AppError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Persistence,
    Auth,
    Hashing,
    Internal,
    Timeout,
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    #[schema(example = "account 42 not found")]
    pub error: String,
    /// Machine-readable error code
    #[schema(example = "NOT_FOUND")]
    pub code: String,
}

impl AppError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Persistence(_) => ErrorKind::Persistence,
            AppError::Auth(_) | AppError::Jwt(_) => ErrorKind::Auth,
            AppError::Hashing(_) => ErrorKind::Hashing,
            AppError::Internal(_) => ErrorKind::Internal,
            AppError::Timeout => ErrorKind::Timeout,
        }
    }

    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Persistence => "PERSISTENCE_ERROR",
            ErrorKind::Auth => "AUTH_ERROR",
            ErrorKind::Hashing => "HASHING_ERROR",
            ErrorKind::Internal => "INTERNAL_ERROR",
            ErrorKind::Timeout => "TIMEOUT",
        }
    }

    /// Get HTTP status code.
    ///
    /// Everything shares a flat 400 except the owner guard's token and
    /// ownership failures (401) and an exceeded request deadline (408).
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(AuthFailure::InvalidToken | AuthFailure::PermissionDenied)
            | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Persistence(e) => {
                tracing::error!("Database error: {:?}", e);
                "a persistence error occurred".to_string()
            }
            AppError::Jwt(e) => {
                tracing::debug!("JWT error: {:?}", e);
                AuthFailure::InvalidToken.to_string()
            }
            AppError::Hashing(msg) => {
                tracing::error!("Hashing error: {}", msg);
                "password hashing failed".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "an internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.user_message(),
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, what: impl FnOnce() -> String) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, what: impl FnOnce() -> String) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(what()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        AppError::NotFound(what.into())
    }

    pub fn hashing(msg: impl Into<String>) -> Self {
        AppError::Hashing(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
