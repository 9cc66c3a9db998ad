//! Fallbacks for unmatched paths and methods

use axum::http::{Method, Uri};

use crate::http::error::ApiError;

/// Any path without a route
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found("route", uri.path())
}

/// A known path requested with a method it does not serve
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::method_not_allowed(format!("{} {}", method, uri.path()))
}
