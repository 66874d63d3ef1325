// src/server/error.rs
//! JSON error responses for the recipe API
//!
//! Every failure is answered with `{message, error}`: `message` names the
//! operation that failed, `error` carries the underlying cause.

use crate::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

/// An error ready to be sent back to the client
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: &str, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                message: message.to_string(),
                error: error.into(),
            },
        }
    }

    /// The requested recipe does not exist
    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Recipe not found", error)
    }

    /// Payload could not be processed or the store rejected the write
    pub fn processing(message: &str, error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, error)
    }

    /// Map a crate error raised while performing `message`
    pub fn from_error(message: &str, err: Error) -> Self {
        let api_error = match err {
            Error::NotFound(_) => Self::not_found(err.to_string()),
            other => Self::processing(message, other.to_string()),
        };

        if api_error.status.is_server_error() {
            tracing::error!("{}: {}", api_error.body.message, api_error.body.error);
        } else {
            tracing::warn!("{}: {}", api_error.body.message, api_error.body.error);
        }
        api_error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
