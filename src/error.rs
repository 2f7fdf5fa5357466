//! Application error type rendered as a localized response envelope.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::api::dto::envelope::Envelope;
use crate::i18n;

/// Errors crossing the service and HTTP layers.
///
/// Every variant maps to one HTTP status and one translation key. The
/// response body always uses the `{code, msg, data}` envelope, with `code`
/// mirroring the HTTP status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {message}")]
    Validation { message: String, details: Value },

    #[error("app token is required")]
    MissingToken,

    #[error("invalid app token")]
    InvalidToken,

    #[error("access to {path} is forbidden")]
    Forbidden { path: String },

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("not found: {message}")]
    NotFound { message: String, details: Value },

    #[error("too many requests, retry in {wait_time}s")]
    TooManyRequests { wait_time: u64 },

    #[error("conflict: {message}")]
    Conflict { message: String, details: Value },

    #[error("internal error: {message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error.
    ///
    /// Authentication failures are 400 while `Forbidden` is 403, so callers can
    /// tell "not authenticated" apart from "authenticated but not allowed".
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. }
            | AppError::MissingToken
            | AppError::InvalidToken
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Translation key used for the envelope `msg`.
    pub fn message_key(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::MissingToken => "app_token_required",
            AppError::InvalidToken => "invalid_token",
            AppError::Forbidden { .. } => "unauthorized_access",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::TooManyRequests { .. } => "too_many_requests",
            AppError::Internal { .. } => "server_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = i18n::translate(self.message_key());

        let data = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details } => {
                json!({ "reason": message, "details": details })
            }
            AppError::TooManyRequests { wait_time } => json!({ "wait_time": wait_time }),
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed with internal error");
                Value::Null
            }
            _ => Value::Null,
        };

        let body = Envelope {
            code: status.as_u16(),
            msg: msg.to_string(),
            data,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        if matches!(e, sqlx::Error::RowNotFound) {
            return AppError::not_found("Record not found", json!({}));
        }

        AppError::internal("Database error", json!({ "error": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        AppError::bad_request("Request validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request("Invalid JSON body", json!({ "error": rejection.body_text() }))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "error": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{self, Lang};
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_auth_statuses_are_distinct() {
        assert_eq!(AppError::MissingToken.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidToken.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Forbidden {
                path: "/a".to_string()
            }
            .status(),
            StatusCode::FORBIDDEN
        );
    }

    #[tokio::test]
    async fn test_forbidden_envelope() {
        let response = AppError::Forbidden {
            path: "/c".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["code"], 403);
        assert_eq!(
            body["msg"],
            "You do not have permission to access this resource"
        );
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_validation_envelope_carries_reason() {
        let response = AppError::bad_request("Page must be greater than 0", json!({"page": 0}))
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["data"]["reason"], "Page must be greater than 0");
        assert_eq!(body["data"]["details"]["page"], 0);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response =
            AppError::internal("Database error", json!({"error": "secret"})).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["msg"], "Internal server error");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_message_follows_request_language() {
        let response = i18n::scope(Lang::Chinese, async {
            AppError::MissingToken.into_response()
        })
        .await;

        let body = body_json(response).await;
        assert_eq!(body["msg"], "需要应用令牌");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
