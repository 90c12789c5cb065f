//! Employee endpoints
//!
//! Each handler is one gateway call (partial update is two: UPDATE then a
//! re-read). Zero matched or affected rows become 404.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::endpoint_not_found;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{CreatedEmployee, Employee, EmployeePatch, NewEmployee};

/// GET /api/employees - list all employees
async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.gateway.list().await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id} - rows matching id, as an array
async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let rows = state.gateway.find(&id).await?;
    if rows.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(rows))
}

/// POST /api/employees - create an employee, echoing the supplied values
async fn create_employee(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<NewEmployee>,
) -> Result<Json<CreatedEmployee>, ApiError> {
    let id = state.gateway.insert(&req).await?;
    tracing::debug!(id, "employee created");

    Ok(Json(req.into_created(id)))
}

/// PATCH /api/employees/{id} - coalesce-on-null update, returns the stored row
async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidJson(patch): ValidJson<EmployeePatch>,
) -> Result<Json<Employee>, ApiError> {
    if state.gateway.update(&id, &patch).await? == 0 {
        return Err(ApiError::NotFound);
    }

    // Not transactional with the UPDATE: a concurrent write may show here.
    let employee = state
        .gateway
        .find(&id)
        .await?
        .into_iter()
        .next()
        .ok_or(ApiError::NotFound)?;

    Ok(Json(employee))
}

/// DELETE /api/employees/{id} - hard delete
async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.gateway.delete(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::debug!(id = %id, "employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Employee routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/employees",
            get(list_employees)
                .post(create_employee)
                .fallback(endpoint_not_found),
        )
        .route(
            "/api/employees/{id}",
            get(get_employee)
                .patch(update_employee)
                .delete(delete_employee)
                .fallback(endpoint_not_found),
        )
}
