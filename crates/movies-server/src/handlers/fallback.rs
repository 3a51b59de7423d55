//! Fallbacks for unmatched routes and methods, so they share the JSON
//! error body.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Any path without a route.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// A known path requested with a method it does not serve.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{} is not supported on {}", method, uri.path()))
}
