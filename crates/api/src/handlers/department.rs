//! Handlers for the `/departments` resource.
//!
//! Department bodies always carry the current employee list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tabula_core::types::DbId;
use tabula_db::models::department::{DepartmentInput, DepartmentWithEmployees};
use tabula_db::repositories::{DepartmentRepo, EmployeeRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /departments/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<DepartmentInput>,
) -> AppResult<(StatusCode, Json<DepartmentWithEmployees>)> {
    let department = DepartmentRepo::create(&state.pool, &input).await?;
    tracing::info!(id = department.id, name = %department.name, "Department created");
    Ok((
        StatusCode::CREATED,
        Json(DepartmentWithEmployees {
            department,
            employees: Vec::new(),
        }),
    ))
}

/// GET /departments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DepartmentWithEmployees>> {
    let department = DepartmentRepo::find_by_id_with_employees(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Department", id))?;
    Ok(Json(department))
}

/// PUT /departments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DepartmentInput>,
) -> AppResult<Json<DepartmentWithEmployees>> {
    let department = DepartmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Department", id))?;
    let employees = EmployeeRepo::list_by_department(&state.pool, id).await?;
    tracing::info!(id, "Department updated");
    Ok(Json(DepartmentWithEmployees {
        department,
        employees,
    }))
}

/// DELETE /departments/{id}
///
/// Employees of the department are deleted with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !DepartmentRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Department", id));
    }
    tracing::info!(id, "Department deleted");
    Ok(Json(MessageResponse::new("Department deleted successfully")))
}
