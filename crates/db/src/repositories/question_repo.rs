//! Repository for the `questions` table and the choice sets owned by each question.

use sqlx::PgPool;
use tabula_core::types::DbId;

use crate::models::question::{ChoiceInput, Question, QuestionInput, QuestionWithChoices};
use crate::repositories::ChoiceRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question_text, created_at, updated_at";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a question together with its choices.
    ///
    /// The question and every choice are written in one transaction, so a
    /// failed choice insert leaves no half-built question behind.
    pub async fn create(pool: &PgPool, input: &QuestionInput) -> Result<Question, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO questions (question_text) VALUES ($1) RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(&input.question_text)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_choices(&mut tx, question.id, &input.choices).await?;

        tx.commit().await?;
        Ok(question)
    }

    /// Find a question by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a question by ID, enriched with its choices.
    pub async fn find_by_id_with_choices(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QuestionWithChoices>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(question) => {
                let choices = ChoiceRepo::list_by_question(pool, question.id).await?;
                Ok(Some(QuestionWithChoices { question, choices }))
            }
            None => Ok(None),
        }
    }

    /// Overwrite the question text and replace the whole choice set.
    ///
    /// Returns `None` if no row with the given `id` exists; nothing is
    /// written in that case.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &QuestionInput,
    ) -> Result<Option<Question>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE questions SET question_text = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.question_text)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(question) = question else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM choices WHERE question_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        Self::insert_choices(&mut tx, id, &input.choices).await?;

        tx.commit().await?;
        Ok(Some(question))
    }

    /// Delete a question by ID. Its choices go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert choices for a question inside an existing transaction,
    /// preserving the order they were given in.
    async fn insert_choices(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        question_id: DbId,
        choices: &[ChoiceInput],
    ) -> Result<(), sqlx::Error> {
        for choice in choices {
            ChoiceRepo::insert(&mut **tx, question_id, &choice.choice_text, choice.is_correct)
                .await?;
        }
        Ok(())
    }
}
