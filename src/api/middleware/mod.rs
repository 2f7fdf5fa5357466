//! HTTP middleware for request processing and protection.
//!
//! Provides the access gate, request language selection, login rate
//! limiting, and request tracing.

pub mod access;
pub mod locale;
pub mod rate_limit;
pub mod tracing;

use axum::{extract::Query, http::Uri};

/// Value of the query parameter `name`; the last occurrence wins when the key
/// is repeated.
///
/// Other parameters never affect the result, so a malformed or repeated
/// unrelated key cannot hide `name`.
pub(crate) fn query_param(uri: &Uri, name: &str) -> Option<String> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;
    pairs
        .into_iter()
        .rev()
        .find_map(|(key, value)| (key == name).then_some(value))
}
