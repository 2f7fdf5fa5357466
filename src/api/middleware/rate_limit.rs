//! Rate limiting for the login endpoint using the token bucket algorithm.

use axum::response::{IntoResponse, Response};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use serde_json::json;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::error::AppError;

/// Replenish one login attempt every 2 seconds.
const LOGIN_PERIOD_SECS: u64 = 2;
const LOGIN_BURST: u32 = 10;

/// Login limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Rate**: 1 request per 2 seconds
/// - **Burst**: 10 requests
///
/// Requests exceeding the limit receive a localized `429` envelope. The
/// server must be served with `ConnectInfo<SocketAddr>`.
pub fn login_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(LOGIN_PERIOD_SECS)
            .burst_size(LOGIN_BURST)
            .finish()
            .expect("login rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf).error_handler(rejection_response)
}

/// Login limiter keyed by `X-Forwarded-For` / `X-Real-IP`, falling back to
/// the peer address.
///
/// Only use behind a trusted reverse proxy; clients can forge these headers.
pub fn proxied_login_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(LOGIN_PERIOD_SECS)
            .burst_size(LOGIN_BURST)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("login rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf).error_handler(rejection_response)
}

/// Renders a limiter rejection as an [`AppError`] envelope, keeping the
/// `retry-after` headers governor attaches.
fn rejection_response(error: GovernorError) -> Response {
    match error {
        GovernorError::TooManyRequests { wait_time, headers } => {
            tracing::warn!(wait_time, "Login rate limit exceeded");
            let mut response = AppError::TooManyRequests { wait_time }.into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        other => AppError::internal(
            "Rate limiter failed",
            json!({ "error": other.to_string() }),
        )
        .into_response(),
    }
}
