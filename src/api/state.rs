//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{AccountRepository, AccountStore, Database};
use crate::services::{AccountService, AuthService, ServiceContainer, Services};

/// Application state shared by every handler.
///
/// Cloned per request; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Account service
    pub account_service: Arc<dyn AccountService>,
    /// Storage handle, used directly only by the health probe
    pub accounts: Arc<dyn AccountRepository>,
    /// Immutable runtime configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the state around any account repository.
    pub fn from_repository(accounts: Arc<dyn AccountRepository>, config: Config) -> Self {
        let container = Services::from_repository(accounts.clone(), config.clone());

        Self {
            auth_service: container.auth(),
            account_service: container.accounts(),
            accounts,
            config: Arc::new(config),
        }
    }

    /// Build the state on the Postgres-backed store.
    pub fn from_database(database: Database, config: Config) -> Self {
        let store = AccountStore::new(database.into_connection());
        Self::from_repository(Arc::new(store), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::infra::repositories::entities::account;

    #[tokio::test]
    async fn test_state_over_database_connection() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<account::Model>::new()])
            .into_connection();
        let config = Config::new("postgres://localhost/test", "test-secret-key-for-testing-only-32chars").unwrap();

        let state = AppState::from_database(Database::from_connection(mock), config);

        assert!(state.account_service.list_accounts().await.unwrap().is_empty());
    }
}
