//! Handlers for the `/users` resource.
//!
//! `GET /users/{project_id}` lists by the direct `users.project_id` column;
//! single-user operations live under `/users/id/{user_id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tabula_core::types::DbId;
use tabula_db::models::user::{CreateUser, UpdateUser, User};
use tabula_db::repositories::{ProjectRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /users/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .ok_or(AppError::not_found("Project", input.project_id))?;

    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(id = user.id, project_id = input.project_id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{project_id}
///
/// An empty list means the project has no users (or does not exist); it is
/// not an error.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list_by_project(&state.pool, project_id).await?;
    tracing::debug!(project_id, count = users.len(), "Listed users by project");
    Ok(Json(users))
}

/// GET /users/id/{user_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(user))
}

/// PUT /users/id/{user_id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    tracing::info!(id, "User updated");
    Ok(Json(user))
}

/// DELETE /users/id/{user_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !UserRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("User", id));
    }
    tracing::info!(id, "User deleted");
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
