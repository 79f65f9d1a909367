//! Handlers for the `/employees` resource.
//!
//! `GET /employees/{id}` takes a department id and lists that department's
//! employees; `PUT` and `DELETE` on the same path take an employee id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::PgPool;
use tabula_core::types::DbId;
use tabula_db::models::employee::{Employee, EmployeeInput};
use tabula_db::repositories::{DepartmentRepo, EmployeeRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

async fn ensure_department_exists(pool: &PgPool, department_id: DbId) -> AppResult<()> {
    DepartmentRepo::find_by_id(pool, department_id)
        .await?
        .ok_or(AppError::not_found("Department", department_id))?;
    Ok(())
}

/// POST /employees/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    ensure_department_exists(&state.pool, input.department_id).await?;

    let employee = EmployeeRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = employee.id,
        department_id = employee.department_id,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /employees/{department_id}
///
/// An empty department yields an empty list, not an error.
pub async fn list_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<DbId>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeRepo::list_by_department(&state.pool, department_id).await?;
    tracing::debug!(department_id, count = employees.len(), "Listed employees");
    Ok(Json(employees))
}

/// PUT /employees/{id}
///
/// Every field is written, so an omitted `dob` or `details` is cleared.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EmployeeInput>,
) -> AppResult<Json<Employee>> {
    EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Employee", id))?;
    ensure_department_exists(&state.pool, input.department_id).await?;

    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Employee", id))?;
    tracing::info!(id, department_id = employee.department_id, "Employee updated");
    Ok(Json(employee))
}

/// DELETE /employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !EmployeeRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Employee", id));
    }
    tracing::info!(id, "Employee deleted");
    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}
