//! Application error type and its HTTP rendering.
//!
//! Every fallible operation of the shortener core returns [`AppError`]. The
//! variants mirror how a failure should be treated by callers:
//!
//! - [`AppError::InvalidRequest`] - malformed id or URL, never retried
//! - [`AppError::NotFound`] - unknown short id
//! - [`AppError::GenerationExhausted`] - no free id within the attempt budget
//! - [`AppError::StoreUnavailable`] - backend I/O or connection failure
//! - [`AppError::Internal`] - anything else that is our fault
//!
//! A duplicate-URL insert is not an error; see
//! [`crate::domain::entities::ShortenOutcome`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidRequest { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    GenerationExhausted { message: String, details: Value },
    #[error("{message}")]
    StoreUnavailable { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_request(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn generation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::GenerationExhausted {
            message: message.into(),
            details,
        }
    }
    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::GenerationExhausted { .. }
            | AppError::StoreUnavailable { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Structured detail attached at the failure site.
    pub fn details(&self) -> &Value {
        match self {
            AppError::InvalidRequest { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::GenerationExhausted { details, .. }
            | AppError::StoreUnavailable { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }

    /// Message followed by the backend `reason` detail, if any.
    ///
    /// For operator output and logs only; HTTP bodies use [`Self::to_error_info`].
    pub fn diagnostic(&self) -> String {
        match self.details().get("reason").and_then(Value::as_str) {
            Some(reason) => format!("{}: {}", self, reason),
            None => self.to_string(),
        }
    }

    /// Returns true for errors caused by the caller.
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }

    /// Converts the error into its public payload.
    ///
    /// Server-side errors are reported opaquely: backend detail stays in the logs.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::InvalidRequest { message, details } => ErrorInfo {
                code: "invalid_request",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::GenerationExhausted { message, .. } => ErrorInfo {
                code: "generation_exhausted",
                message: message.clone(),
                details: json!({}),
            },
            AppError::StoreUnavailable { .. } => ErrorInfo {
                code: "store_unavailable",
                message: "Storage is unavailable".to_string(),
                details: json!({}),
            },
            AppError::Internal { .. } => ErrorInfo {
                code: "internal_error",
                message: "Internal server error".to_string(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, details = ?self.details(), "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "database error");
        AppError::store_unavailable("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        tracing::error!(error = %e, "storage file I/O error");
        AppError::store_unavailable("Storage file error", json!({ "reason": e.to_string() }))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        tracing::error!(error = %e, "storage file encoding error");
        AppError::store_unavailable(
            "Storage file encoding error",
            json!({ "reason": e.to_string() }),
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::invalid_request("Request validation failed", json!({ "fields": e.to_string() }))
    }
}
