//! API error types with IntoResponse
//!
//! Every failure renders as `{"success": false, "error": <code>, "message": <text>}`
//! with the same code as the HTTP status. The specific cause is logged, the
//! body only carries the generic message for its status.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body or required fields missing/malformed (400)
    BadRequest { reason: String },

    /// No matching record or page (404)
    NotFound { resource: &'static str, id: String },

    /// Question could not be created (405)
    MethodNotAllowed { reason: String },

    /// Lookup or write could not be carried out (422)
    Unprocessable { reason: String },

    /// Storage failure with no dedicated status (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest {
            reason: reason.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn method_not_allowed(cause: impl fmt::Display) -> Self {
        Self::MethodNotAllowed {
            reason: cause.to_string(),
        }
    }

    pub fn unprocessable(cause: impl fmt::Display) -> Self {
        Self::Unprocessable {
            reason: cause.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for this error's status.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad request error",
            Self::NotFound { .. } => "resource not found",
            Self::MethodNotAllowed { .. } => "method is not allowed",
            Self::Unprocessable { .. } => "unprocessable",
            Self::Internal { .. } => "internal server error",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest { reason } => write!(f, "bad request: {}", reason),
            Self::NotFound { resource, id } => write!(f, "{} '{}' not found", resource, id),
            Self::MethodNotAllowed { reason } => write!(f, "method not allowed: {}", reason),
            Self::Unprocessable { reason } => write!(f, "unprocessable: {}", reason),
            Self::Internal { message } => write!(f, "internal error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::BadRequest { .. } | Self::NotFound { .. } => tracing::debug!("{}", self),
            Self::MethodNotAllowed { .. } | Self::Unprocessable { .. } => tracing::warn!("{}", self),
            Self::Internal { .. } => tracing::error!("{}", self),
        }

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Sqlx(e) => Self::Internal {
                message: e.to_string(),
            },
        }
    }
}
