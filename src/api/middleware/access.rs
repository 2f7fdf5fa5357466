//! Route access gate.
//!
//! Runs [`AccessService::authorize`](crate::application::services::AccessService::authorize)
//! for every API request. The app token is read from the `token` query
//! parameter; headers are not consulted.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::query_param;
use crate::application::services::Access;
use crate::{error::AppError, state::AppState};

/// Authorizes the request path for the caller's app token.
///
/// On success the resolved [`Employee`](crate::domain::entities::Employee) is
/// inserted into request extensions. Exempt paths pass through without one.
///
/// # Errors
///
/// - `400` when the token is missing or unknown
/// - `403` when the caller has no rule for the path
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/users/create", post(create_user_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), access::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = query_param(req.uri(), "token");
    let path = req.uri().path().to_owned();

    if let Access::Granted(employee) = st.access_service.authorize(&path, token.as_deref()).await? {
        req.extensions_mut().insert(employee);
    }

    Ok(next.run(req).await)
}
