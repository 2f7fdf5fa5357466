//! Password hashing with bcrypt.

use bcrypt::DEFAULT_COST;
use serde_json::json;

use crate::error::AppError;

/// Hashes a plain-text password with bcrypt at the default cost.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if bcrypt fails to produce a hash.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal("Password hashing failed", json!({"error": e.to_string()})))
}

/// Checks a plain-text password against a stored bcrypt hash.
///
/// A malformed stored hash never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be verified");
            false
        }
    }
}
