mod app;
mod config;
mod error;
mod handlers;
mod items;
mod models;
mod storage;

#[cfg(test)]
mod tests;

use config::Config;
use handlers::AppState;
use items::create_item_store;
use std::net::SocketAddr;
use storage::create_image_storage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_listing=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Starting item listing service");
    tracing::info!("Storage type: {:?}", config.storage_type);

    let items = create_item_store(&config).await?;
    let images = create_image_storage(&config);
    tracing::info!("Image directory: {}", config.image_dir);

    let state = AppState { items, images };
    let app = app::build_router(state, &config)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
