//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod tenants;
pub mod users;

pub use auth::login_handler;
pub use health::health_handler;
pub use tenants::{company_index_handler, plan_index_handler};
pub use users::create_user_handler;
