//! Employee login and app token issuing.

use std::sync::Arc;

use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;
use crate::utils::password::verify_password;
use crate::utils::token::generate_token;

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    pub employee_id: i64,
    pub name: String,
    pub token: String,
}

/// Exchanges employee credentials for a fresh app token.
///
/// Each login replaces the stored token, so any token issued earlier stops
/// resolving.
pub struct AuthService<R: EmployeeRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository + ?Sized> AuthService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Verifies `password` for `username` and issues a new token.
    ///
    /// Unknown usernames, inactive employees and wrong passwords all yield the
    /// same error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] if the credentials are rejected.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, AppError> {
        let credentials = self
            .repository
            .find_credentials(username)
            .await?
            .filter(|c| c.is_active)
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &credentials.password_hash) {
            tracing::info!(username, "Rejected login with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let token = generate_token();
        self.repository
            .set_app_token(credentials.id, &token)
            .await?;

        tracing::info!(employee_id = credentials.id, "Issued app token");

        Ok(LoginGrant {
            employee_id: credentials.id,
            name: credentials.name,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EmployeeCredentials;
    use crate::domain::repositories::MockEmployeeRepository;
    use crate::utils::token::TOKEN_LEN;

    fn credentials(is_active: bool) -> EmployeeCredentials {
        EmployeeCredentials {
            id: 3,
            name: "Sokha".to_string(),
            password_hash: bcrypt::hash("pa55word", 4).unwrap(),
            is_active,
        }
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let mut mock_repo = MockEmployeeRepository::new();
        let creds = credentials(true);
        mock_repo
            .expect_find_credentials()
            .withf(|username| username == "sokha")
            .times(1)
            .returning(move |_| Ok(Some(creds.clone())));
        mock_repo
            .expect_set_app_token()
            .withf(|id, token| *id == 3 && token.len() == TOKEN_LEN)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo));

        let grant = service.login("sokha", "pa55word").await.unwrap();

        assert_eq!(grant.employee_id, 3);
        assert_eq!(grant.name, "Sokha");
        assert_eq!(grant.token.len(), TOKEN_LEN);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut mock_repo = MockEmployeeRepository::new();
        let creds = credentials(true);
        mock_repo
            .expect_find_credentials()
            .returning(move |_| Ok(Some(creds.clone())));
        mock_repo.expect_set_app_token().never();

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.login("sokha", "guess").await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut mock_repo = MockEmployeeRepository::new();
        mock_repo
            .expect_find_credentials()
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.login("ghost", "pa55word").await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_inactive_employee() {
        let mut mock_repo = MockEmployeeRepository::new();
        let creds = credentials(false);
        mock_repo
            .expect_find_credentials()
            .returning(move |_| Ok(Some(creds.clone())));
        mock_repo.expect_set_app_token().never();

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.login("sokha", "pa55word").await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }
}
