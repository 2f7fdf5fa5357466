//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contract; PostgreSQL implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`EmployeeRepository`] - Token resolution and login credentials
//! - [`PermissionRepository`] - Permission groups and route rules
//! - [`UserRepository`] - Application users
//! - [`TenantRepository`] - Plan and company listings
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod employee_repository;
pub mod permission_repository;
pub mod tenant_repository;
pub mod user_repository;

pub use employee_repository::EmployeeRepository;
pub use permission_repository::PermissionRepository;
pub use tenant_repository::TenantRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use permission_repository::MockPermissionRepository;
#[cfg(test)]
pub use tenant_repository::MockTenantRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
