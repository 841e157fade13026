//! Migrate command - Database migration management.

use sea_orm::DbErr;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

fn migration_failed(action: MigrateAction) -> impl FnOnce(DbErr) -> AppError {
    move |e| AppError::internal(format!("migrate {:?} failed: {}", action, e))
}

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let action = args.action;
    tracing::info!("Running migrate {:?}", action);

    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await.map_err(migration_failed(action))?;
            tracing::info!("Accounts schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration()
                .await
                .map_err(migration_failed(action))?;
            tracing::info!("Rolled back the last migration");
        }
        MigrateAction::Status => {
            let status = db
                .migration_status()
                .await
                .map_err(migration_failed(action))?;
            for (name, applied) in status {
                println!("{}: {}", name, if applied { "applied" } else { "pending" });
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping the accounts table and re-running every migration");
            db.fresh_migrations()
                .await
                .map_err(migration_failed(action))?;
        }
    }

    Ok(())
}
