//! Helpers shared by the server and the admin CLI.
//!
//! - [`password`] - bcrypt hashing and verification
//! - [`token`] - app token generation

pub mod password;
pub mod token;
