//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the API used by HTTP
//! handlers, the access middleware and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::access_service::AccessService`] - Route authorization by app token
//! - [`services::auth_service::AuthService`] - Employee login and token issuing
//! - [`services::user_service::UserService`] - Application users
//! - [`services::tenant_service::TenantService`] - Paginated tenant listings

pub mod services;
