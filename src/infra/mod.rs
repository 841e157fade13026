//! Infrastructure layer - External systems integration
//!
//! - Database connection and schema migrations
//! - Account repositories (Postgres and in-memory)

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{AccountRepository, AccountStore, MemoryAccountStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockAccountRepository;
