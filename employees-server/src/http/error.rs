//! API error types with IntoResponse
//!
//! Every error body has the shape `{"message": <string>}`. Gateway failures
//! are logged and answered with a generic message; driver detail never
//! reaches the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::GatewayError;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const INTERNAL_ERROR: &str = "Something went wrong";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint Not Found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No employee row matched the id (404)
    NotFound,

    /// No route matched method + path (404)
    RouteNotFound,

    /// Request body could not be parsed (400)
    BadRequest { message: String },

    /// Gateway failure (500, logged)
    Gateway(GatewayError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, EMPLOYEE_NOT_FOUND.to_owned()),
            Self::RouteNotFound => (StatusCode::NOT_FOUND, ENDPOINT_NOT_FOUND.to_owned()),
            Self::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            Self::Gateway(e) => {
                tracing::error!("Gateway error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_owned())
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<GatewayError> for ApiError {
    fn from(e: GatewayError) -> Self {
        Self::Gateway(e)
    }
}
