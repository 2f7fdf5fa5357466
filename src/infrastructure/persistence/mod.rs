//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgEmployeeRepository`] - Token resolution, credentials, token issuing
//! - [`PgPermissionRepository`] - Permission groups, memberships and rules
//! - [`PgUserRepository`] - Application users
//! - [`PgTenantRepository`] - Paginated plan and company listings
//!
//! [`pagination`] holds the generic SQL pagination helper shared by listings.

pub mod pagination;
pub mod pg_employee_repository;
pub mod pg_permission_repository;
pub mod pg_tenant_repository;
pub mod pg_user_repository;

pub use pg_employee_repository::PgEmployeeRepository;
pub use pg_permission_repository::PgPermissionRepository;
pub use pg_tenant_repository::PgTenantRepository;
pub use pg_user_repository::PgUserRepository;
