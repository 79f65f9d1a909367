//! Question and choice models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabula_core::types::{DbId, Timestamp};

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question_text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `choices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Choice {
    pub id: DbId,
    pub choice_text: String,
    pub is_correct: bool,
    pub question_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A question enriched with its choices, in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionWithChoices {
    #[serde(flatten)]
    pub question: Question,
    pub choices: Vec<Choice>,
}

/// One choice as it appears inside a question body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceInput {
    pub choice_text: String,
    pub is_correct: bool,
}

/// DTO for creating a question or replacing one wholesale.
///
/// On update the `choices` list replaces every existing choice.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionInput {
    pub question_text: String,
    #[serde(default)]
    pub choices: Vec<ChoiceInput>,
}

/// DTO for creating a standalone choice under an existing question.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChoice {
    pub choice_text: String,
    pub is_correct: bool,
    pub question_id: DbId,
}

/// DTO for overwriting a choice. The owning question cannot change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChoice {
    pub choice_text: String,
    pub is_correct: bool,
}
