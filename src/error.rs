//! Structured error types for the admin panel server.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidFieldValue,
    NotificationNotFound,
    ConfigError,
    DatabaseError,
    InternalError,
}

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("notification not found: {0}")]
    NotificationNotFound(i64),

    #[error("config error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("{0}")]
    Internal(anyhow::Error),
}

impl PanelError {
    pub fn invalid_value(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PanelError::InvalidValue { .. } => ErrorCode::InvalidFieldValue,
            PanelError::NotificationNotFound(_) => ErrorCode::NotificationNotFound,
            PanelError::Config(_) => ErrorCode::ConfigError,
            PanelError::Database(_) => ErrorCode::DatabaseError,
            PanelError::Internal(_) => ErrorCode::InternalError,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            PanelError::InvalidValue { .. } => StatusCode::BAD_REQUEST,
            PanelError::NotificationNotFound(_) => StatusCode::NOT_FOUND,
            PanelError::Config(_) | PanelError::Database(_) | PanelError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// Store code returns anyhow; recover a typed error when one was wrapped.
impl From<anyhow::Error> for PanelError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<PanelError>() {
            Ok(panel_err) => panel_err,
            Err(err) => match err.downcast::<rusqlite::Error>() {
                Ok(db_err) => PanelError::Database(db_err),
                Err(err) => PanelError::Internal(err),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: ErrorCode,
    message: String,
}

impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = ?self.code(), error = %self, "Request failed");
        } else {
            tracing::debug!(code = ?self.code(), error = %self, "Request rejected");
        }
        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for server operations.
pub type PanelResult<T> = std::result::Result<T, PanelError>;
