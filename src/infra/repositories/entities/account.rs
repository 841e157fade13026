//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Account;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub encrypted_password: String,
    #[sea_orm(unique)]
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Account {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            encrypted_password: model.encrypted_password,
            number: model.number,
            balance: model.balance,
            created_at: model.created_at,
        }
    }
}

/// Convert domain entity to a fully-set active model for insertion
impl From<&Account> for ActiveModel {
    fn from(account: &Account) -> Self {
        use sea_orm::Set;

        ActiveModel {
            id: Set(account.id),
            first_name: Set(account.first_name.clone()),
            last_name: Set(account.last_name.clone()),
            encrypted_password: Set(account.encrypted_password.clone()),
            number: Set(account.number),
            balance: Set(account.balance),
            created_at: Set(account.created_at),
        }
    }
}
