//! Repository for the `employees` table.

use sqlx::PgPool;
use tabula_core::types::DbId;

use crate::models::employee::{Employee, EmployeeInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, dob, details, department_id, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &EmployeeInput) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (name, dob, details, department_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.name)
            .bind(input.dob)
            .bind(&input.details)
            .bind(input.department_id)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the employees of a department, ordered by ID.
    pub async fn list_by_department(
        pool: &PgPool,
        department_id: DbId,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE department_id = $1 ORDER BY id");
        sqlx::query_as::<_, Employee>(&query)
            .bind(department_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every employee field, including `dob` and `details`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &EmployeeInput,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                name = $2,
                dob = $3,
                details = $4,
                department_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.dob)
            .bind(&input.details)
            .bind(input.department_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an employee by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
