//! Route authorization for app-token callers.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::domain::entities::{Employee, GroupRules};
use crate::domain::repositories::{EmployeeRepository, PermissionRepository};
use crate::error::AppError;

/// Outcome of a successful authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// The path is exempt; no identity was resolved.
    Exempt,
    /// The caller was identified and may access the path.
    Granted(Employee),
}

/// Decides whether the holder of an app token may access a route path.
///
/// A caller is allowed when one of their active permission groups is
/// unrestricted, or when an active group lists a rule whose active route is
/// exactly the requested path. Nothing is cached between calls, so permission
/// changes take effect on the next request.
pub struct AccessService<E: EmployeeRepository + ?Sized, P: PermissionRepository + ?Sized> {
    employees: Arc<E>,
    permissions: Arc<P>,
    exempt_paths: HashSet<String>,
}

impl<E: EmployeeRepository + ?Sized, P: PermissionRepository + ?Sized> AccessService<E, P> {
    pub fn new(
        employees: Arc<E>,
        permissions: Arc<P>,
        exempt_paths: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            employees,
            permissions,
            exempt_paths: exempt_paths.into_iter().collect(),
        }
    }

    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_paths.contains(path)
    }

    /// Authorizes `token` for `path`.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingToken`] if the path is not exempt and the token is
    ///   absent or blank
    /// - [`AppError::InvalidToken`] if no employee holds the token
    /// - [`AppError::Forbidden`] if no active group grants the path
    /// - [`AppError::Internal`] on database errors
    pub async fn authorize(&self, path: &str, token: Option<&str>) -> Result<Access, AppError> {
        if self.is_exempt(path) {
            return Ok(Access::Exempt);
        }

        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingToken)?;

        let employee = self
            .employees
            .find_by_token(token)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if self.is_allowed(employee.id, path).await? {
            tracing::debug!(employee_id = employee.id, path, "Access granted");
            Ok(Access::Granted(employee))
        } else {
            tracing::info!(employee_id = employee.id, path, "Access denied");
            Err(AppError::Forbidden {
                path: path.to_string(),
            })
        }
    }

    async fn is_allowed(&self, employee_id: i64, path: &str) -> Result<bool, AppError> {
        let groups = self.permissions.active_groups_for(employee_id).await?;

        let mut rule_ids = BTreeSet::new();
        for group in groups {
            match group.rules {
                GroupRules::Unrestricted => return Ok(true),
                GroupRules::RuleIds(ids) => rule_ids.extend(ids),
            }
        }

        if rule_ids.is_empty() {
            return Ok(false);
        }

        let ids: Vec<i64> = rule_ids.iter().copied().collect();
        let rules = self.permissions.find_rules(&ids).await?;

        for id in &ids {
            if !rules.iter().any(|rule| rule.id == *id) {
                tracing::warn!(employee_id, rule_id = id, "Permission group references a missing rule");
            }
        }

        Ok(rules
            .iter()
            .filter(|rule| rule.is_active)
            .any(|rule| rule.route == path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PermissionGroup, PermissionRule};
    use crate::domain::repositories::{MockEmployeeRepository, MockPermissionRepository};

    fn employee(id: i64) -> Employee {
        Employee {
            id,
            name: "Dara".to_string(),
            username: "dara".to_string(),
        }
    }

    fn group(id: i64, rules: &str) -> PermissionGroup {
        PermissionGroup {
            id,
            name: format!("group-{id}"),
            rules: GroupRules::parse(rules),
            is_active: true,
        }
    }

    fn rule(id: i64, route: &str, is_active: bool) -> PermissionRule {
        PermissionRule {
            id,
            name: format!("rule-{id}"),
            route: route.to_string(),
            is_active,
        }
    }

    fn known_token(employees: &mut MockEmployeeRepository) {
        employees
            .expect_find_by_token()
            .withf(|token| token == "tok")
            .returning(|_| Ok(Some(employee(7))));
    }

    fn service(
        employees: MockEmployeeRepository,
        permissions: MockPermissionRepository,
    ) -> AccessService<MockEmployeeRepository, MockPermissionRepository> {
        AccessService::new(
            Arc::new(employees),
            Arc::new(permissions),
            vec!["/auths/login".to_string()],
        )
    }

    /// Employee 7 in one group listing rules 1 and 2, mapped to `/a` and `/b`.
    fn listed_rules() -> AccessService<MockEmployeeRepository, MockPermissionRepository> {
        let mut employees = MockEmployeeRepository::new();
        known_token(&mut employees);

        let mut permissions = MockPermissionRepository::new();
        permissions
            .expect_active_groups_for()
            .withf(|id| *id == 7)
            .returning(|_| Ok(vec![group(1, "1,2")]));
        permissions
            .expect_find_rules()
            .withf(|ids| ids.to_vec() == vec![1, 2])
            .returning(|_| Ok(vec![rule(1, "/a", true), rule(2, "/b", true)]));

        service(employees, permissions)
    }

    #[tokio::test]
    async fn test_exempt_path_needs_no_token() {
        let mut employees = MockEmployeeRepository::new();
        employees.expect_find_by_token().never();
        let svc = service(employees, MockPermissionRepository::new());

        let result = svc.authorize("/auths/login", None).await;

        assert_eq!(result.unwrap(), Access::Exempt);
    }

    #[tokio::test]
    async fn test_missing_token() {
        let svc = service(MockEmployeeRepository::new(), MockPermissionRepository::new());

        let result = svc.authorize("/users/create", None).await;
        assert!(matches!(result.unwrap_err(), AppError::MissingToken));

        let result = svc.authorize("/users/create", Some("   ")).await;
        assert!(matches!(result.unwrap_err(), AppError::MissingToken));
    }

    #[tokio::test]
    async fn test_unknown_token_is_rejected() {
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_find_by_token()
            .times(1)
            .returning(|_| Ok(None));
        let mut permissions = MockPermissionRepository::new();
        permissions.expect_active_groups_for().never();

        let svc = service(employees, permissions);
        let result = svc.authorize("/a", Some("nope")).await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidToken));
    }

    #[tokio::test]
    async fn test_token_is_trimmed() {
        let svc = listed_rules();

        let result = svc.authorize("/a", Some("  tok\n")).await;

        assert_eq!(result.unwrap(), Access::Granted(employee(7)));
    }

    #[tokio::test]
    async fn test_wildcard_group_allows_any_path_without_rules() {
        let mut employees = MockEmployeeRepository::new();
        known_token(&mut employees);
        let mut permissions = MockPermissionRepository::new();
        permissions
            .expect_active_groups_for()
            .returning(|_| Ok(vec![group(1, "3"), group(2, "*")]));
        permissions.expect_find_rules().never();

        let svc = service(employees, permissions);

        for path in ["/a", "/tenants/plan/index", "/anything/at/all"] {
            let result = svc.authorize(path, Some("tok")).await;
            assert_eq!(result.unwrap(), Access::Granted(employee(7)));
        }
    }

    #[tokio::test]
    async fn test_listed_rule_grants_exact_route() {
        let svc = listed_rules();

        assert!(svc.authorize("/a", Some("tok")).await.is_ok());
        assert!(svc.authorize("/b", Some("tok")).await.is_ok());
    }

    #[tokio::test]
    async fn test_unlisted_route_is_forbidden() {
        let svc = listed_rules();

        let result = svc.authorize("/c", Some("tok")).await;
        assert!(matches!(result.unwrap_err(), AppError::Forbidden { path } if path == "/c"));

        let result = svc.authorize("/a/", Some("tok")).await;
        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_inactive_rule_does_not_grant() {
        let mut employees = MockEmployeeRepository::new();
        known_token(&mut employees);
        let mut permissions = MockPermissionRepository::new();
        permissions
            .expect_active_groups_for()
            .returning(|_| Ok(vec![group(1, "1")]));
        permissions
            .expect_find_rules()
            .returning(|_| Ok(vec![rule(1, "/a", false)]));

        let svc = service(employees, permissions);
        let result = svc.authorize("/a", Some("tok")).await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_rule_ids_are_unioned_across_groups() {
        let mut employees = MockEmployeeRepository::new();
        known_token(&mut employees);
        let mut permissions = MockPermissionRepository::new();
        permissions
            .expect_active_groups_for()
            .returning(|_| Ok(vec![group(1, "2,x"), group(2, "5,2")]));
        permissions
            .expect_find_rules()
            .withf(|ids| ids.to_vec() == vec![2, 5])
            .times(1)
            .returning(|_| Ok(vec![rule(5, "/c", true)]));

        let svc = service(employees, permissions);

        assert!(svc.authorize("/c", Some("tok")).await.is_ok());
    }

    #[tokio::test]
    async fn test_no_groups_is_forbidden() {
        let mut employees = MockEmployeeRepository::new();
        known_token(&mut employees);
        let mut permissions = MockPermissionRepository::new();
        permissions
            .expect_active_groups_for()
            .returning(|_| Ok(vec![]));
        permissions.expect_find_rules().never();

        let svc = service(employees, permissions);
        let result = svc.authorize("/a", Some("tok")).await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_find_by_token()
            .returning(|_| Err(AppError::internal("Database error", serde_json::json!({}))));

        let svc = service(employees, MockPermissionRepository::new());
        let result = svc.authorize("/a", Some("tok")).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
