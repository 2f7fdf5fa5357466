//! API route configuration.
//!
//! Every route here passes through [`crate::api::middleware::access`]; the
//! login route is on the exemption list.

use crate::api::handlers::{
    company_index_handler, create_user_handler, login_handler, plan_index_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Gated API routes.
///
/// # Endpoints
///
/// - `GET  /tenants/plan/index`    - Paginated plan listing
/// - `GET  /tenants/company/index` - Paginated company listing
/// - `POST /users/create`          - Create a user
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/tenants/plan/index", get(plan_index_handler))
        .route("/tenants/company/index", get(company_index_handler))
        .route("/users/create", post(create_user_handler))
}

/// `POST /auths/login`, kept apart so it can carry its own rate limit.
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/auths/login", post(login_handler))
}
