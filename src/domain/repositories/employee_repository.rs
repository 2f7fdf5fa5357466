//! Repository trait for employee identities and credentials.

use crate::domain::entities::{Employee, EmployeeCredentials, NewEmployee};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for `hr_employee`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEmployeeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Resolves an app token by exact match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_token(&self, token: &str) -> Result<Option<Employee>, AppError>;

    /// Loads login material for a username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<EmployeeCredentials>, AppError>;

    /// Finds an employee by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AppError>;

    /// Replaces the employee's app token, invalidating the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the employee does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_app_token(&self, employee_id: i64, token: &str) -> Result<(), AppError>;

    /// Creates an employee with an already hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError>;
}
