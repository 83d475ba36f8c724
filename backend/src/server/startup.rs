//! Database preparation run before the listener opens.
//!
//! Migrations and mapping validation use blocking clients, so both run on
//! the blocking thread pool. A mapping mismatch aborts startup.

use backend::config::AppSettings;
use backend::domain::{MappingConfigurationError, MappingValidationService};
use backend::outbound::persistence::{
    DbPool, ENTITY_MAPPINGS, MigrationError, PoolError, PostgresSchemaSnapshotRepository,
    run_pending_migrations,
};
use tokio::task::JoinError;

use super::Persistence;
use tracing::info;

/// Failures that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error(transparent)]
    Mapping(#[from] MappingConfigurationError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("startup task panicked: {0}")]
    Task(#[from] JoinError),
}

/// Migrate, validate and open the pool when a database is configured.
pub async fn prepare_database(settings: &AppSettings) -> Result<Persistence, StartupError> {
    let Some(pool_config) = settings.pool_config() else {
        return Ok(Persistence::InMemory);
    };
    let url = pool_config.database_url().to_owned();

    if settings.run_migrations {
        let migration_url = url.clone();
        let applied =
            tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url)).await??;
        info!(count = applied.len(), "database migrations applied");
    }

    if settings.validate_mapping {
        tokio::task::spawn_blocking(move || {
            let repository = PostgresSchemaSnapshotRepository::new(url);
            MappingValidationService::new(ENTITY_MAPPINGS).validate(&repository)
        })
        .await??;
        info!(entities = ENTITY_MAPPINGS.len(), "entity mappings match the schema");
    }

    Ok(Persistence::Postgres(DbPool::new(pool_config).await?))
}
