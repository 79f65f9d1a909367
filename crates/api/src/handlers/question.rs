//! Handlers for the `/questions` resource.
//!
//! A question owns its choices: create and update take the full choice list,
//! and update replaces whatever choices were there before.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tabula_core::types::DbId;
use tabula_db::models::question::{QuestionInput, QuestionWithChoices};
use tabula_db::repositories::QuestionRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /questions/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<QuestionInput>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let question = QuestionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = question.id,
        choice_count = input.choices.len(),
        "Question created"
    );
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Question created successfully").with_id(question.id)),
    ))
}

/// GET /questions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<QuestionWithChoices>> {
    let question = QuestionRepo::find_by_id_with_choices(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Question", id))?;
    Ok(Json(question))
}

/// PUT /questions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<QuestionInput>,
) -> AppResult<Json<MessageResponse>> {
    QuestionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Question", id))?;
    tracing::info!(id, choice_count = input.choices.len(), "Question updated");
    Ok(Json(MessageResponse::new("Question updated successfully")))
}

/// DELETE /questions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !QuestionRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Question", id));
    }
    tracing::info!(id, "Question deleted");
    Ok(Json(MessageResponse::new("Question deleted successfully")))
}
