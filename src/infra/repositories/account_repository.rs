//! Account storage contract and its relational implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use crate::domain::Account;
use crate::errors::{AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account storage contract.
///
/// Callers depend on this trait only, so backends can be swapped without
/// touching services or handlers.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account. A duplicate id is an error, never an upsert.
    async fn create_account(&self, account: &Account) -> AppResult<()>;

    /// Delete an account by id. Deleting an absent id succeeds.
    async fn delete_account(&self, id: Uuid) -> AppResult<()>;

    /// Reserved; accounts have no update path yet.
    async fn update_account(&self, account: &Account) -> AppResult<()>;

    /// Fetch a single account, or `NotFound`.
    async fn get_account_by_id(&self, id: Uuid) -> AppResult<Account>;

    /// Fetch a single account by its number, or `NotFound`.
    async fn get_account_by_number(&self, number: i64) -> AppResult<Account>;

    /// All accounts, in no particular order.
    async fn get_accounts(&self) -> AppResult<Vec<Account>>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> AppResult<()>;
}

/// Postgres-backed implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn create_account(&self, account: &Account) -> AppResult<()> {
        AccountEntity::insert(ActiveModel::from(account))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn delete_account(&self, id: Uuid) -> AppResult<()> {
        let result = AccountEntity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!("Deleted {} row(s) for account {}", result.rows_affected, id);
        Ok(())
    }

    async fn update_account(&self, _account: &Account) -> AppResult<()> {
        Ok(())
    }

    async fn get_account_by_id(&self, id: Uuid) -> AppResult<Account> {
        AccountEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Account::from)
            .ok_or_not_found(|| format!("account {}", id))
    }

    async fn get_account_by_number(&self, number: i64) -> AppResult<Account> {
        AccountEntity::find()
            .filter(account::Column::Number.eq(number))
            .one(&self.db)
            .await?
            .map(Account::from)
            .ok_or_not_found(|| format!("account {}", number))
    }

    async fn get_accounts(&self) -> AppResult<Vec<Account>> {
        let models = AccountEntity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Account::from).collect())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.ping().await?;
        Ok(())
    }
}
