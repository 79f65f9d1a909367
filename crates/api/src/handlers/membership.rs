//! Handlers for project membership under `/projects/{project_id}/users`.
//!
//! Membership is tracked in its own junction table and is independent of a
//! user's direct `project_id`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::PgPool;
use tabula_core::types::DbId;
use tabula_db::models::membership::ProjectUserMembership;
use tabula_db::models::user::User;
use tabula_db::repositories::{MembershipRepo, ProjectRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Verify both ends of a membership exist, project first.
async fn ensure_pair_exists(pool: &PgPool, project_id: DbId, user_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(pool, project_id)
        .await?
        .ok_or(AppError::not_found("Project", project_id))?;
    UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(AppError::not_found("User", user_id))?;
    Ok(())
}

/// POST /projects/{project_id}/users/{user_id}
pub async fn add(
    State(state): State<AppState>,
    Path((project_id, user_id)): Path<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    ensure_pair_exists(&state.pool, project_id, user_id).await?;

    let membership = MembershipRepo::add(&state.pool, project_id, user_id)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest("User is already a member of this project".to_string())
        })?;
    tracing::info!(id = membership.id, project_id, user_id, "User added to project");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User added to project successfully")),
    ))
}

/// GET /projects/{project_id}/users/{user_id}
pub async fn get(
    State(state): State<AppState>,
    Path((project_id, user_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProjectUserMembership>> {
    ensure_pair_exists(&state.pool, project_id, user_id).await?;

    let membership = MembershipRepo::find(&state.pool, project_id, user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "User {user_id} is not a member of project {project_id}"
            ))
        })?;
    Ok(Json(membership))
}

/// GET /projects/{project_id}/users
pub async fn list_users(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<User>>> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::not_found("Project", project_id))?;

    let users = MembershipRepo::list_users(&state.pool, project_id).await?;
    tracing::debug!(project_id, count = users.len(), "Listed project members");
    Ok(Json(users))
}

/// DELETE /projects/{project_id}/users/{user_id}
///
/// Removing a pair that was never added succeeds without error.
pub async fn remove(
    State(state): State<AppState>,
    Path((project_id, user_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    ensure_pair_exists(&state.pool, project_id, user_id).await?;

    let removed = MembershipRepo::remove(&state.pool, project_id, user_id).await?;
    tracing::info!(project_id, user_id, removed, "User removed from project");
    Ok(Json(MessageResponse::new(
        "User removed from project successfully",
    )))
}
