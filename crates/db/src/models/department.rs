//! Department entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabula_core::types::{DbId, Timestamp};

use super::employee::Employee;

/// A row from the `departments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub details: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A department enriched with its employees.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentWithEmployees {
    #[serde(flatten)]
    pub department: Department,
    pub employees: Vec<Employee>,
}

/// DTO for creating or overwriting a department.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentInput {
    pub name: String,
    pub details: String,
}
