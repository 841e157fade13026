//! Bank API - a small account service over JSON/HTTP.
//!
//! Clients open accounts, log in with an account number and password to
//! get a signed token, and read their own account with that token.
//!
//! # Architecture Layers
//!
//! - **cli** / **commands**: `serve` and `migrate` entry points
//! - **config**: Environment-driven configuration and constants
//! - **domain**: The account entity and password hashing
//! - **services**: Account and authentication use cases
//! - **infra**: Postgres (SeaORM) and in-memory account storage
//! - **api**: Axum routes, handlers, the owner guard
//! - **types**: Shared response shapes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server against Postgres
//! bank-api serve
//!
//! # Start without a database
//! bank-api serve --in-memory
//!
//! # Run migrations
//! bank-api migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Account, Password};
pub use errors::{AppError, AppResult};
