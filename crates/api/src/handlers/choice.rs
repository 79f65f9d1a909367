//! Handlers for the `/choices` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tabula_core::types::DbId;
use tabula_db::models::question::{Choice, CreateChoice, UpdateChoice};
use tabula_db::repositories::{ChoiceRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /choices/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateChoice>,
) -> AppResult<(StatusCode, Json<Choice>)> {
    QuestionRepo::find_by_id(&state.pool, input.question_id)
        .await?
        .ok_or(AppError::not_found("Question", input.question_id))?;

    let choice = ChoiceRepo::create(&state.pool, &input).await?;
    tracing::info!(id = choice.id, question_id = choice.question_id, "Choice created");
    Ok((StatusCode::CREATED, Json(choice)))
}

/// GET /choices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Choice>> {
    let choice = ChoiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Choice", id))?;
    Ok(Json(choice))
}

/// PUT /choices/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChoice>,
) -> AppResult<Json<Choice>> {
    let choice = ChoiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Choice", id))?;
    tracing::info!(id, "Choice updated");
    Ok(Json(choice))
}

/// DELETE /choices/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ChoiceRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Choice", id));
    }
    tracing::info!(id, "Choice deleted");
    Ok(Json(MessageResponse::new("Choice deleted successfully")))
}
