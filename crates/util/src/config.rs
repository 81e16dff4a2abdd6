use std::{env, fmt};

use super::database_url;

/// Application runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    fn from_str(value: &str) -> Result<Self, ConfigError> {
        match value {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }

    /// Returns the canonical name used for logging labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

/// Which subreddit repository variant the process should construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryKind {
    /// SQLite-backed repository.
    Persistent,
    /// Canned in-memory repository.
    Fixture,
}

impl RepositoryKind {
    fn from_str(value: &str) -> Result<Self, ConfigError> {
        match value {
            "sqlite" | "persistent" => Ok(Self::Persistent),
            "fixture" | "mock" => Ok(Self::Fixture),
            other => Err(ConfigError::InvalidRepository(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Persistent => "persistent",
            Self::Fixture => "fixture",
        }
    }
}

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub database_url: String,
    pub repository: RepositoryKind,
}

impl AppConfig {
    /// Constructs the configuration by reading and validating environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_value = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let environment = Environment::from_str(&env_value)?;
        let repo_value = env::var("YARC_REPOSITORY").unwrap_or_else(|_| "sqlite".to_string());
        let repository = RepositoryKind::from_str(&repo_value)?;

        Ok(Self {
            environment,
            database_url: database_url(),
            repository,
        })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    InvalidEnvironment(String),
    InvalidRepository(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnvironment(value) => write!(
                f,
                "APP_ENV must be one of 'development', 'production', or 'test' (got {value})"
            ),
            Self::InvalidRepository(value) => write!(
                f,
                "YARC_REPOSITORY must be one of 'sqlite' or 'fixture' (got {value})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
