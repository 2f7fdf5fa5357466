//! Repository trait for permission groups and rules.

use crate::domain::entities::{GroupRules, PermissionGroup, PermissionRule};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over `permission_group`, `permission_group_access`
/// and `permission_rule`.
///
/// Groups are returned with their `rules` column already parsed into
/// [`GroupRules`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPermissionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionRepository: Send + Sync {
    /// Lists the active groups the employee belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn active_groups_for(&self, employee_id: i64)
    -> Result<Vec<PermissionGroup>, AppError>;

    /// Loads the rules with the given ids, active or not. Unknown ids are
    /// absent from the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_rules(&self, rule_ids: &[i64]) -> Result<Vec<PermissionRule>, AppError>;

    /// Creates an active rule for a literal route.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_rule(&self, name: &str, route: &str) -> Result<PermissionRule, AppError>;

    /// Creates an active group.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the group name is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_group(
        &self,
        name: &str,
        rules: &GroupRules,
    ) -> Result<PermissionGroup, AppError>;

    /// Adds an employee to a group. Assigning twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including unknown ids.
    async fn assign_group(&self, employee_id: i64, group_id: i64) -> Result<(), AppError>;
}
