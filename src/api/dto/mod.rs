//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Responses are wrapped in [`envelope::Envelope`].

pub mod auth;
pub mod envelope;
pub mod health;
pub mod pagination;
pub mod tenant;
pub mod user;
