//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tabula_core::types::DbId;
use tabula_db::models::project::{Project, ProjectInput};
use tabula_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /projects/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.id, name = %project.project_name, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects/{project_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// PUT /projects/{project_id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectInput>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    tracing::info!(id, "Project updated");
    Ok(Json(project))
}

/// DELETE /projects/{project_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Project", id));
    }
    tracing::info!(id, "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
