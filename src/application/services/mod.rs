//! Business logic services for the application layer.

pub mod access_service;
pub mod auth_service;
pub mod tenant_service;
pub mod user_service;

pub use access_service::{Access, AccessService};
pub use auth_service::{AuthService, LoginGrant};
pub use tenant_service::TenantService;
pub use user_service::UserService;
