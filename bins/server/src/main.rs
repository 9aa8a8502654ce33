//! Estudiantes server
//!
//! Main entry point for the student records service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use estudiantes_api::{AppState, create_router};
use estudiantes_core::storage::{StorageConfig, StorageService};
use estudiantes_db::connect_with;
use estudiantes_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estudiantes=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect_with(&config.database).await?;
    info!("Connected to database");

    // Photo storage: local staging plus the remote bucket
    let staging = StorageService::from_config(StorageConfig::staging(&config.storage))?;
    let storage = StorageService::from_config(StorageConfig::remote(&config.storage))?;
    if !config.storage.has_credentials() {
        warn!("No storage credentials configured; relying on the environment");
    }
    info!(
        provider = storage.provider_name(),
        bucket = storage.bucket(),
        upload_dir = %config.storage.upload_dir,
        "Photo storage configured"
    );

    // Create application state
    let max_file_size = storage.config().max_file_size;
    let state = AppState::new(
        Arc::new(db),
        Arc::new(staging),
        Arc::new(storage),
        max_file_size,
    );

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
