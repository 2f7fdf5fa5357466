//! Application user management.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a user. The name is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the trimmed name is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, name: &str) -> Result<User, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Name must not be blank",
                serde_json::json!({"name": name}),
            ));
        }

        let user = self
            .repository
            .create(NewUser {
                name: name.to_string(),
            })
            .await?;

        tracing::info!(user_id = user.id, "Created user");

        Ok(user)
    }
}
