//! Repository for the `departments` table.

use sqlx::PgPool;
use tabula_core::types::DbId;

use crate::models::department::{Department, DepartmentInput, DepartmentWithEmployees};
use crate::repositories::EmployeeRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, details, created_at, updated_at";

/// Provides CRUD operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a new department, returning the created row.
    pub async fn create(pool: &PgPool, input: &DepartmentInput) -> Result<Department, sqlx::Error> {
        let query = format!(
            "INSERT INTO departments (name, details) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(&input.name)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    /// Find a department by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a department by ID, enriched with its employees.
    pub async fn find_by_id_with_employees(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DepartmentWithEmployees>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(department) => {
                let employees = EmployeeRepo::list_by_department(pool, department.id).await?;
                Ok(Some(DepartmentWithEmployees {
                    department,
                    employees,
                }))
            }
            None => Ok(None),
        }
    }

    /// Overwrite a department's name and details.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &DepartmentInput,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!(
            "UPDATE departments SET name = $2, details = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.details)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a department and, by cascade, its employees.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
