//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabula_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub project_name: String,
    pub project_detail: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or overwriting a project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInput {
    pub project_name: String,
    pub project_detail: String,
}
