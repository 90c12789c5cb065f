//! Router test helpers: a gateway that always fails and oneshot request helpers

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use crate::db::{EmployeeGateway, GatewayError};
use crate::models::{Employee, EmployeePatch, NewEmployee};

/// Gateway standing in for an unreachable database
pub struct FailingGateway;

fn unreachable_db() -> GatewayError {
    GatewayError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl EmployeeGateway for FailingGateway {
    async fn list(&self) -> Result<Vec<Employee>, GatewayError> {
        Err(unreachable_db())
    }

    async fn find(&self, _: &str) -> Result<Vec<Employee>, GatewayError> {
        Err(unreachable_db())
    }

    async fn insert(&self, _: &NewEmployee) -> Result<i64, GatewayError> {
        Err(unreachable_db())
    }

    async fn update(&self, _: &str, _: &EmployeePatch) -> Result<u64, GatewayError> {
        Err(unreachable_db())
    }

    async fn delete(&self, _: &str) -> Result<u64, GatewayError> {
        Err(unreachable_db())
    }

    async fn ping(&self) -> Result<i64, GatewayError> {
        Err(unreachable_db())
    }
}

/// Send a bodiless request. An empty response body decodes as `Value::Null`.
pub async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a request with a JSON body.
pub async fn call_json(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    call_raw(app, method, uri, &body.to_string()).await
}

/// Send a request with a raw body labelled as JSON.
pub async fn call_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
