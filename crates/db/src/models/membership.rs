//! Project/user membership association rows.

use serde::Serialize;
use sqlx::FromRow;
use tabula_core::types::{DbId, Timestamp};

/// A row from the `project_user_memberships` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectUserMembership {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
