//! Repository for the `choices` table.

use sqlx::{PgConnection, PgPool};
use tabula_core::types::DbId;

use crate::models::question::{Choice, CreateChoice, UpdateChoice};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, choice_text, is_correct, question_id, created_at, updated_at";

/// Provides CRUD operations for choices.
pub struct ChoiceRepo;

impl ChoiceRepo {
    /// Insert a new choice, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateChoice) -> Result<Choice, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::insert(&mut conn, input.question_id, &input.choice_text, input.is_correct).await
    }

    /// Insert a choice on an already-open connection or transaction.
    pub(crate) async fn insert(
        conn: &mut PgConnection,
        question_id: DbId,
        choice_text: &str,
        is_correct: bool,
    ) -> Result<Choice, sqlx::Error> {
        let query = format!(
            "INSERT INTO choices (choice_text, is_correct, question_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Choice>(&query)
            .bind(choice_text)
            .bind(is_correct)
            .bind(question_id)
            .fetch_one(conn)
            .await
    }

    /// Find a choice by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Choice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM choices WHERE id = $1");
        sqlx::query_as::<_, Choice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the choices of a question in insertion order.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<Choice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM choices WHERE question_id = $1 ORDER BY id");
        sqlx::query_as::<_, Choice>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a choice's text and correctness flag.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChoice,
    ) -> Result<Option<Choice>, sqlx::Error> {
        let query = format!(
            "UPDATE choices SET choice_text = $2, is_correct = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Choice>(&query)
            .bind(id)
            .bind(&input.choice_text)
            .bind(input.is_correct)
            .fetch_optional(pool)
            .await
    }

    /// Delete a choice by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM choices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
