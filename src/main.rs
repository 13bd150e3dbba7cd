use recipe_finder::{config::Config, server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.upstream.app_id.is_empty() || config.upstream.app_key.is_empty() {
        tracing::warn!("Upstream credentials are not set");
        tracing::warn!("Set RECIPE_APP_ID and RECIPE_APP_KEY to query the live API");
    }

    tracing::info!("Starting recipe-finder on {}", config.bind_address());
    tracing::info!("Upstream endpoint: {}", config.upstream.base_url);

    server::start_server(config).await
}
