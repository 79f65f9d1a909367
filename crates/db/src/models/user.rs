//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabula_core::types::{DbId, Timestamp};

/// A user row from the `users` table.
///
/// `project_id` is the direct owning project. It is independent of the
/// membership table and becomes `None` when that project is deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub user_name: String,
    pub project_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub user_name: String,
    pub project_id: DbId,
}

/// DTO for renaming a user. The owning project is fixed at creation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub user_name: String,
}
