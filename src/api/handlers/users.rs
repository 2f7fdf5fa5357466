//! Handler for application user creation.

use axum::{Extension, Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::domain::entities::Employee;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users/create`
///
/// # Request Body
///
/// ```json
/// { "name": "Vanna" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `name` is missing, blank or longer than 50
/// characters.
pub async fn create_user_handler(
    State(state): State<AppState>,
    employee: Option<Extension<Employee>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Envelope<UserResponse>, AppError> {
    let Json(body) = payload?;
    body.validate()?;

    let user = state.user_service.create_user(&body.name).await?;

    if let Some(Extension(employee)) = employee {
        tracing::info!(user_id = user.id, created_by = employee.id, "User created");
    }

    Ok(Envelope::success(user.into()))
}
