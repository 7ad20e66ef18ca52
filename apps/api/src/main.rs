mod config;
mod db;
mod errors;
mod matching;
mod models;
mod profile;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::matching::catalog::ListingCatalog;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgStore;
use crate::store::seed::SEED_LISTINGS;
use crate::store::InternshipStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting InternMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    run_migrations(&db).await?;
    let store = Arc::new(PgStore::new(db));

    if config.seed_listings {
        store.seed_listings(SEED_LISTINGS).await?;
    }

    // Listings are reference data: load once, serve read-only
    let catalog = ListingCatalog::new(store.all_listings().await?);
    info!(
        "Listing catalog loaded: {} listings, {} vocabulary terms",
        catalog.len(),
        catalog.options().skills.len()
    );

    let state = AppState {
        store,
        catalog: Arc::new(catalog),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
