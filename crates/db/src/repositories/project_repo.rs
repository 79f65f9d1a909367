//! Repository for the `projects` table.

use sqlx::PgPool;
use tabula_core::types::DbId;

use crate::models::project::{Project, ProjectInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_name, project_detail, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProjectInput) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (project_name, project_detail)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.project_name)
            .bind(&input.project_detail)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a project's name and detail.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET project_name = $2, project_detail = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.project_name)
            .bind(&input.project_detail)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Membership rows are cascaded; users that named this project directly
    /// keep their row with `project_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
