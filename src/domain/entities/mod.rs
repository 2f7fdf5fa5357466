//! Core domain entities of the administrative backend.
//!
//! Entities are plain data structures without persistence concerns. Creation
//! inputs use separate `New*` structs.
//!
//! # Entity Types
//!
//! - [`Employee`] - Caller identity resolved from an app token
//! - [`PermissionGroup`] / [`PermissionRule`] - Route-based access control
//! - [`User`] - Application user records
//! - [`Plan`] / [`Company`] - Tenants and their subscription plans

pub mod employee;
pub mod permission;
pub mod status;
pub mod tenant;
pub mod user;

pub use employee::{Employee, EmployeeCredentials, NewEmployee};
pub use permission::{GroupRules, PermissionGroup, PermissionRule};
pub use status::ActiveStatus;
pub use tenant::{Company, CompanyFilter, Plan, PlanFilter};
pub use user::{NewUser, User};
