mod analysis;
mod catalog;
mod config;
mod errors;
mod extract;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::extract::FormatDispatchExtractor;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ProjectionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerCompass API v{}", env!("CARGO_PKG_VERSION"));

    // Load the role catalog (compiled-in defaults unless ROLE_CATALOG_PATH is set)
    let catalog = Arc::new(RoleCatalog::load(config.role_catalog_path.as_deref())?);
    info!(
        skill_roles = catalog.role_skills.len(),
        keyword_roles = catalog.role_keywords.len(),
        "Role catalog loaded"
    );

    // Resume uploads are persisted here before extraction
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    info!("Upload directory ready: {}", config.upload_dir.display());

    // Keyed, expiring store for career projection results
    let projections = ProjectionStore::new(config.result_ttl_secs);

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog,
        extractor: Arc::new(FormatDispatchExtractor),
        projections,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
