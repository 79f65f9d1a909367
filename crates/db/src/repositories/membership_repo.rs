//! Repository for the `project_user_memberships` junction table.

use sqlx::PgPool;
use tabula_core::types::DbId;

use crate::models::membership::ProjectUserMembership;
use crate::models::user::User;

/// Column list for the junction table.
const COLUMNS: &str = "id, project_id, user_id, created_at, updated_at";

/// Column list for the `users` table (used in JOIN queries).
const USER_COLUMNS: &str = "u.id, u.user_name, u.project_id, u.created_at, u.updated_at";

/// Provides add/list/remove operations on project membership.
pub struct MembershipRepo;

impl MembershipRepo {
    /// Add a user to a project.
    ///
    /// Relies on `uq_project_user_memberships_project_user`: the insert and
    /// the duplicate check are one statement, so concurrent identical
    /// requests cannot both succeed. Returns `None` if the pair already
    /// existed.
    pub async fn add(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<Option<ProjectUserMembership>, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_user_memberships (project_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (project_id, user_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectUserMembership>(&query)
            .bind(project_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the membership row for a (project, user) pair.
    pub async fn find(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<Option<ProjectUserMembership>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_user_memberships
             WHERE project_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, ProjectUserMembership>(&query)
            .bind(project_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the users that are members of a project, ordered by user ID.
    ///
    /// Only membership rows count here; `users.project_id` is ignored.
    pub async fn list_users(pool: &PgPool, project_id: DbId) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {USER_COLUMNS}
             FROM users u
             JOIN project_user_memberships m ON m.user_id = u.id
             WHERE m.project_id = $1
             ORDER BY u.id"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Remove a user from a project.
    ///
    /// Returns `true` if the association was removed; removing a pair that
    /// does not exist is not an error.
    pub async fn remove(pool: &PgPool, project_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM project_user_memberships
             WHERE project_id = $1 AND user_id = $2",
        )
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
