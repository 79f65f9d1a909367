//! Employee entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabula_core::types::{DbId, Timestamp};

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub dob: Option<NaiveDate>,
    pub details: Option<String>,
    pub department_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or overwriting an employee.
///
/// Updates write every field: omitting `dob` or `details` clears them.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub dob: Option<NaiveDate>,
    pub details: Option<String>,
    pub department_id: DbId,
}
