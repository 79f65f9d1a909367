//! Repository for the `users` table.

use sqlx::PgPool;
use tabula_core::types::DbId;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_name, project_id, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (user_name, project_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.user_name)
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    /// Find a user by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List users whose direct `project_id` is the given project.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, User>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Rename a user.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("UPDATE users SET user_name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.user_name)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a user by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
