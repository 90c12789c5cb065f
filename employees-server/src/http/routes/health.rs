//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::endpoint_not_found;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Ping response
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub result: i64,
}

/// GET /ping - evaluate `1 + 1` through the gateway
async fn ping(State(state): State<Arc<AppState>>) -> Result<Json<PingResponse>, ApiError> {
    let result = state.gateway.ping().await?;
    Ok(Json(PingResponse { result }))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/ping", get(ping).fallback(endpoint_not_found))
}
