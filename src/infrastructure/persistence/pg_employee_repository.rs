//! PostgreSQL implementation of employee repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ActiveStatus, Employee, EmployeeCredentials, NewEmployee};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    username: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            name: row.name,
            username: row.username,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    id: i64,
    name: String,
    password: String,
    is_active: String,
}

/// PostgreSQL repository over `hr_employee`.
///
/// Tokens are stored as issued and matched exactly.
pub struct PgEmployeeRepository {
    pool: Arc<PgPool>,
}

impl PgEmployeeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, username
            FROM hr_employee
            WHERE app_token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Employee::from))
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<EmployeeCredentials>, AppError> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            r#"
            SELECT id, name, password, is_active
            FROM hr_employee
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| EmployeeCredentials {
            id: r.id,
            name: r.name,
            password_hash: r.password,
            is_active: ActiveStatus::from_db(&r.is_active).is_active(),
        }))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, username FROM hr_employee WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Employee::from))
    }

    async fn set_app_token(&self, employee_id: i64, token: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE hr_employee SET app_token = $2 WHERE id = $1")
            .bind(employee_id)
            .bind(token)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Employee not found",
                json!({"id": employee_id}),
            ));
        }

        Ok(())
    }

    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO hr_employee (name, username, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, username
            "#,
        )
        .bind(&new_employee.name)
        .bind(&new_employee.username)
        .bind(&new_employee.password_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
