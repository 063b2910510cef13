//! Promotrack server binary
//!
//! Loads the tracker configuration (path from `PROMOTRACK_CONFIG`, falling
//! back to the bundled defaults) and serves the REST API.

use anyhow::Result;
use promotrack::config::TrackerConfig;
use promotrack::server::ServerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promotrack=info".into()),
        )
        .init();

    let config = match std::env::var("PROMOTRACK_CONFIG") {
        Ok(path) => {
            tracing::info!(path = %path, "loading configuration");
            TrackerConfig::from_yaml_file(&path)?
        }
        Err(_) => {
            tracing::info!("no PROMOTRACK_CONFIG set, using default configuration");
            TrackerConfig::default_config()
        }
    };

    ServerBuilder::new(config).serve().await
}
