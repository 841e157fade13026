//! In-memory account repository.
//!
//! Keeps every account in a `HashMap` behind an async `RwLock`. Used by the
//! test suites and by `serve --in-memory` for local runs without Postgres.
//! Enforces the same uniqueness the relational schema does (id and number).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DbErr;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::AccountRepository;
use crate::domain::Account;
use crate::errors::{AppResult, OptionExt};

/// In-memory implementation of AccountRepository
#[derive(Clone, Default)]
pub struct MemoryAccountStore {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MemoryAccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether the store holds no accounts
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountStore {
    async fn create_account(&self, account: &Account) -> AppResult<()> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.id) {
            return Err(DbErr::RecordNotInserted.into());
        }
        if accounts.values().any(|a| a.number == account.number) {
            return Err(DbErr::Custom(format!(
                "duplicate account number {}",
                account.number
            ))
            .into());
        }

        accounts.insert(account.id, account.clone());
        Ok(())
    }

    async fn delete_account(&self, id: Uuid) -> AppResult<()> {
        self.accounts.write().await.remove(&id);
        Ok(())
    }

    async fn update_account(&self, _account: &Account) -> AppResult<()> {
        Ok(())
    }

    async fn get_account_by_id(&self, id: Uuid) -> AppResult<Account> {
        self.accounts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_not_found(|| format!("account {}", id))
    }

    async fn get_account_by_number(&self, number: i64) -> AppResult<Account> {
        self.accounts
            .read()
            .await
            .values()
            .find(|a| a.number == number)
            .cloned()
            .ok_or_not_found(|| format!("account {}", number))
    }

    async fn get_accounts(&self) -> AppResult<Vec<Account>> {
        Ok(self.accounts.read().await.values().cloned().collect())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::errors::AppError;

    fn account(number: i64) -> Account {
        Account {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            encrypted_password: "hashed".to_string(),
            number,
            balance: 0,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch() {
        let store = MemoryAccountStore::new();
        let acc = account(10);
        store.create_account(&acc).await.unwrap();

        assert_eq!(store.get_account_by_id(acc.id).await.unwrap(), acc);
        assert_eq!(store.get_account_by_number(10).await.unwrap(), acc);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let store = MemoryAccountStore::new();
        let acc = account(10);
        store.create_account(&acc).await.unwrap();

        let mut dup = acc.clone();
        dup.number = 11;
        let err = store.create_account(&dup).await.unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_duplicate_number_rejected() {
        let store = MemoryAccountStore::new();
        store.create_account(&account(10)).await.unwrap();

        let err = store.create_account(&account(10)).await.unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_missing_keys_are_not_found() {
        let store = MemoryAccountStore::new();

        assert!(matches!(
            store.get_account_by_id(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            store.get_account_by_number(99).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryAccountStore::new();
        let acc = account(10);
        store.create_account(&acc).await.unwrap();

        store.delete_account(acc.id).await.unwrap();
        store.delete_account(acc.id).await.unwrap();
        store.delete_account(Uuid::new_v4()).await.unwrap();

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_is_a_no_op() {
        let store = MemoryAccountStore::new();
        let acc = account(10);
        store.create_account(&acc).await.unwrap();

        let mut changed = acc.clone();
        changed.balance = 500;
        store.update_account(&changed).await.unwrap();

        assert_eq!(store.get_account_by_id(acc.id).await.unwrap().balance, 0);
    }

    #[tokio::test]
    async fn test_get_accounts_lists_everything() {
        let store = MemoryAccountStore::new();
        for n in 0..5 {
            store.create_account(&account(n)).await.unwrap();
        }

        let mut numbers: Vec<_> = store
            .get_accounts()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.number)
            .collect();
        numbers.sort();
        assert_eq!(numbers, vec![0, 1, 2, 3, 4]);
    }
}
