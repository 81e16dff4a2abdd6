mod bootstrap;
mod telemetry;

use tracing::info;
use yarc_util::{load_env_file, AppConfig};

/// Number of entries logged from the trending view at startup.
const TRENDING_PREVIEW: i64 = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_env_file();
    let config = AppConfig::from_env()?;

    telemetry::init_tracing(&config)?;

    let repository = bootstrap::build_repository(&config).await?;
    info!(
        stage = "app",
        repository = %config.repository.as_str(),
        env = %config.environment.as_str(),
        categories = ?repository.list(),
        "subreddit repository ready"
    );

    let trending = repository.get_trending(TRENDING_PREVIEW).await?;
    let names: Vec<&str> = trending.iter().map(|info| info.name.as_str()).collect();
    info!(stage = "app", count = trending.len(), trending = ?names, "trending snapshot");

    Ok(())
}
