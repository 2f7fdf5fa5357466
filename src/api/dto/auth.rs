//! DTOs for employee login.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::LoginGrant;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Issued token. Pass it as the `token` query parameter on later requests.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub employee_id: i64,
    pub name: String,
    pub token: String,
}

impl From<LoginGrant> for LoginResponse {
    fn from(grant: LoginGrant) -> Self {
        Self {
            employee_id: grant.employee_id,
            name: grant.name,
            token: grant.token,
        }
    }
}
