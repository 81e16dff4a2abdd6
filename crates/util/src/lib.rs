pub mod config;

use std::env;

pub use config::{AppConfig, ConfigError, Environment, RepositoryKind};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://yarc.db?mode=rwc";

/// Loads environment variables from `.env` when available.
///
/// Missing files are ignored so the function is safe in production builds
/// where dotenv files are not deployed.
pub fn load_env_file() {
    let _ = dotenvy::dotenv();
}

/// Returns the connection string for the subreddit store.
///
/// Resolved from `DATABASE_URL`, falling back to [`DEFAULT_DATABASE_URL`].
pub fn database_url() -> String {
    env::var("DATABASE_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}
