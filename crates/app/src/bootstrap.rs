use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use yarc_core::SubredditRepository;
use yarc_storage::{Database, FixtureSubredditRepository, StorageError};
use yarc_util::{AppConfig, RepositoryKind};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to prepare storage: {0}")]
    Storage(#[from] StorageError),
}

/// Constructs the repository variant selected by the configuration.
///
/// The persistent variant connects to the database and applies migrations
/// before it is handed out.
pub async fn build_repository(
    config: &AppConfig,
) -> Result<Arc<dyn SubredditRepository>, BootstrapError> {
    match config.repository {
        RepositoryKind::Fixture => Ok(Arc::new(FixtureSubredditRepository::new())),
        RepositoryKind::Persistent => {
            let database = Database::connect(&config.database_url).await?;
            database.run_migrations().await?;
            info!(stage = "app", "database migrated");
            Ok(Arc::new(database.subreddits()))
        }
    }
}
