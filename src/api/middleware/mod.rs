//! API middleware.

mod auth;

pub use auth::{extract_token, require_owner};
