//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                - Health check (outside the access gate)
//! - `POST /auths/login`           - Login (gate-exempt, rate limited)
//! - `GET  /tenants/plan/index`    - Plan listing
//! - `GET  /tenants/company/index` - Company listing
//! - `POST /users/create`          - User creation
//!
//! # Middleware (outermost first)
//!
//! - **Path normalization** - Trailing slash handling
//! - **Tracing** - Structured request/response logging
//! - **Locale** - `lang` query parameter scoped to the request
//! - **Access gate** - `token` query parameter checked against route rules

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{access, locale, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, login rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let login = api::routes::login_routes();
    let login = if behind_proxy {
        login.layer(rate_limit::proxied_login_layer())
    } else {
        login.layer(rate_limit::login_layer())
    };

    NormalizePathLayer::trim_trailing_slash().layer(router_with_login(state, login))
}

/// Builds the router around the given login routes, without path
/// normalization.
///
/// [`app_router`] passes rate-limited login routes; tests pass them bare so
/// requests need no peer address.
pub fn router_with_login(state: AppState, login: Router<AppState>) -> Router {
    let gated = api::routes::protected_routes()
        .merge(login)
        .route_layer(middleware::from_fn_with_state(state.clone(), access::layer));

    Router::new()
        .route("/health", get(health_handler))
        .merge(gated)
        .with_state(state)
        .layer(middleware::from_fn(locale::layer))
        .layer(tracing::layer())
}
