//! Service Container - Centralized service access.
//!
//! Handlers reach services through this container so tests can swap
//! the storage backend without touching the HTTP layer.

use std::sync::Arc;

use super::{AccountManager, AccountService, AuthService, Authenticator};
use crate::config::Config;
use crate::infra::AccountRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get account service
    fn accounts(&self) -> Arc<dyn AccountService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    account_service: Arc<dyn AccountService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(auth_service: Arc<dyn AuthService>, account_service: Arc<dyn AccountService>) -> Self {
        Self {
            auth_service,
            account_service,
        }
    }

    /// Wire both services over one shared account repository
    pub fn from_repository(accounts: Arc<dyn AccountRepository>, config: Config) -> Self {
        let auth_service = Arc::new(Authenticator::new(accounts.clone(), config));
        let account_service = Arc::new(AccountManager::new(accounts));

        Self {
            auth_service,
            account_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn accounts(&self) -> Arc<dyn AccountService> {
        self.account_service.clone()
    }
}
