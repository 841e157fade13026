//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on the `AccountRepository` trait,
//! never on a concrete store.

mod account_service;
mod auth_service;
pub mod container;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use account_service::{AccountManager, AccountService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;

use crate::errors::{AppError, AppResult};

/// Run CPU-heavy work (password hashing) off the async workers.
pub(crate) async fn run_blocking<F, T>(work: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::internal(format!("blocking task failed: {}", e)))?
}
