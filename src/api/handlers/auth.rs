//! Handler for employee login.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse};
use crate::api::dto::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges username and password for a new app token.
///
/// # Endpoint
///
/// `POST /auths/login`
///
/// Exempt from the access gate and rate limited per client IP.
///
/// # Request Body
///
/// ```json
/// { "username": "dara", "password": "secret" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": 200,
///   "msg": "Success",
///   "data": { "employee_id": 1, "name": "Dara", "token": "Xy3..." }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or rejected credentials.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Envelope<LoginResponse>, AppError> {
    let Json(body) = payload?;
    body.validate()?;

    let grant = state
        .auth_service
        .login(body.username.trim(), &body.password)
        .await?;

    Ok(Envelope::success(grant.into()))
}
