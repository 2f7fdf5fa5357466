//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and wraps results
//! in the `{code, msg, data}` envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Access gate, locale, rate limiting and tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
