//! services/docgen/src/bin/docgen.rs

use docgen_core::ports::{DocumentGenerator, DraftStore};
use docgen_lib::{
    adapters::{FileDraftStore, HttpDocumentGenerator, MemoryDraftStore, SimulatedDocumentGenerator},
    config::{Config, DraftStoreKind},
    error::AppError,
    web::{build_router, AppState},
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting docgen...");

    // --- 2. Initialize Service Adapters ---
    let generator: Arc<dyn DocumentGenerator> = match &config.generator_endpoint {
        Some(endpoint) => {
            info!("Using document generator at {}", endpoint);
            Arc::new(HttpDocumentGenerator::new(endpoint.clone(), config.request_timeout)?)
        }
        None => {
            warn!("GENERATOR_ENDPOINT is not set; documents will be simulated.");
            Arc::new(SimulatedDocumentGenerator::new(config.simulated_delay))
        }
    };

    let store: Arc<dyn DraftStore> = match &config.draft_store {
        DraftStoreKind::File(path) => {
            let file_store = FileDraftStore::new(path.clone());
            info!("Saving drafts to {}", file_store.path().display());
            Arc::new(file_store)
        }
        DraftStoreKind::Memory => {
            info!("Keeping drafts in memory only.");
            Arc::new(MemoryDraftStore::new())
        }
    };

    // --- 3. Build the Shared AppState & Router ---
    let app_state = Arc::new(AppState::new(config.clone(), generator, store));
    let app = build_router(app_state);

    // --- 4. Start the Server ---
    info!("Form available at http://{}/", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
