//! Route handlers organized by resource

pub mod employees;
pub mod health;

use super::error::ApiError;

/// Fallback for any method + path combination without a handler
pub async fn endpoint_not_found() -> ApiError {
    ApiError::RouteNotFound
}
