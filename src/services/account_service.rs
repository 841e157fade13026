//! Account service - account use cases on top of the storage contract.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::run_blocking;
use crate::domain::{Account, CreateAccountRequest, TransferRequest};
use crate::errors::AppResult;
use crate::infra::AccountRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Build a new account from the request and persist it
    async fn create_account(&self, request: CreateAccountRequest) -> AppResult<Account>;

    /// Get account by ID
    async fn get_account(&self, id: Uuid) -> AppResult<Account>;

    /// List all accounts
    async fn list_accounts(&self) -> AppResult<Vec<Account>>;

    /// Delete account; absent ids are not an error
    async fn delete_account(&self, id: Uuid) -> AppResult<()>;

    /// Accept a transfer request. Balances are not touched; the request
    /// is returned as-is.
    async fn transfer(&self, request: TransferRequest) -> AppResult<TransferRequest>;
}

/// Concrete implementation of AccountService.
pub struct AccountManager {
    accounts: Arc<dyn AccountRepository>,
}

impl AccountManager {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn create_account(&self, request: CreateAccountRequest) -> AppResult<Account> {
        let CreateAccountRequest {
            first_name,
            last_name,
            password,
        } = request;

        let account = run_blocking(move || Account::new(first_name, last_name, &password)).await?;
        self.accounts.create_account(&account).await?;

        tracing::info!("Created account {} (number {})", account.id, account.number);
        Ok(account)
    }

    async fn get_account(&self, id: Uuid) -> AppResult<Account> {
        self.accounts.get_account_by_id(id).await
    }

    async fn list_accounts(&self) -> AppResult<Vec<Account>> {
        self.accounts.get_accounts().await
    }

    async fn delete_account(&self, id: Uuid) -> AppResult<()> {
        self.accounts.delete_account(id).await?;
        tracing::info!("Deleted account {}", id);
        Ok(())
    }

    async fn transfer(&self, request: TransferRequest) -> AppResult<TransferRequest> {
        tracing::info!(
            "Transfer of {} to account {} accepted (not applied)",
            request.amount,
            request.to_account
        );
        Ok(request)
    }
}
