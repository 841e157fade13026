//! Migration: Make account numbers unique.
//!
//! Numbers are drawn at random, so a collision has to be caught here
//! rather than silently producing two accounts behind one login key.

use sea_orm_migration::prelude::*;

use super::Accounts;

const INDEX_NAME: &str = "idx_accounts_number";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Accounts::Table)
                    .col(Accounts::Number)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(INDEX_NAME)
                    .table(Accounts::Table)
                    .to_owned(),
            )
            .await
    }
}
