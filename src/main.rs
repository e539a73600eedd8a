use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use outfit_api::api::{create_router, AppState};
use outfit_api::config::Config;
use outfit_api::services::{JsonCatalog, RecommendationEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("outfit_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Wardrobe catalog for requests that don't carry their own items
    let catalog = JsonCatalog::load(&config.catalog_path).await?;

    let state = AppState::new(
        RecommendationEngine::new(config.history_capacity),
        Arc::new(catalog),
        config.rng_seed,
    );
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        address = %config.bind_address(),
        catalog = %config.catalog_path,
        seeded = config.rng_seed.is_some(),
        "Server running"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
