//! Shared application state injected into handlers and middleware.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AccessService, AuthService, TenantService, UserService};
use crate::domain::repositories::{
    EmployeeRepository, PermissionRepository, TenantRepository, UserRepository,
};
use crate::infrastructure::persistence::{
    PgEmployeeRepository, PgPermissionRepository, PgTenantRepository, PgUserRepository,
};

pub type DynAccessService = AccessService<dyn EmployeeRepository, dyn PermissionRepository>;

/// Services built once at startup over a single connection pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub access_service: Arc<DynAccessService>,
    pub auth_service: Arc<AuthService<dyn EmployeeRepository>>,
    pub user_service: Arc<UserService<dyn UserRepository>>,
    pub tenant_service: Arc<TenantService<dyn TenantRepository>>,
}

impl AppState {
    /// Wires PostgreSQL repositories into the services.
    pub fn new(pool: Arc<PgPool>, exempt_paths: Vec<String>) -> Self {
        Self::with_repositories(
            pool.clone(),
            Arc::new(PgEmployeeRepository::new(pool.clone())),
            Arc::new(PgPermissionRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgTenantRepository::new(pool)),
            exempt_paths,
        )
    }

    /// Builds the state over arbitrary repository implementations.
    pub fn with_repositories(
        pool: Arc<PgPool>,
        employees: Arc<dyn EmployeeRepository>,
        permissions: Arc<dyn PermissionRepository>,
        users: Arc<dyn UserRepository>,
        tenants: Arc<dyn TenantRepository>,
        exempt_paths: Vec<String>,
    ) -> Self {
        Self {
            pool,
            access_service: Arc::new(AccessService::new(
                employees.clone(),
                permissions,
                exempt_paths,
            )),
            auth_service: Arc::new(AuthService::new(employees)),
            user_service: Arc::new(UserService::new(users)),
            tenant_service: Arc::new(TenantService::new(tenants)),
        }
    }
}
