mod config;
mod db;
mod directory;
mod errors;
mod models;
mod routes;
mod showcase;
mod state;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::open_store_or_lazy;
use crate::directory::store::SqliteDirectoryStore;
use crate::routes::build_router;
use crate::showcase::store::SqliteShowcaseStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Me-API v{}", env!("CARGO_PKG_VERSION"));

    // Showcase store: rebuilt from the sample data on every start
    let showcase_pool = open_store_or_lazy(&config.showcase_database_path).await;
    if let Err(e) = showcase::schema::reset_and_seed(&showcase_pool).await {
        error!("Failed to reset showcase schema: {e:#}");
    }

    // Directory store: tables created once, rows kept across restarts
    let directory_pool = open_store_or_lazy(&config.directory_database_path).await;
    if let Err(e) = directory::schema::ensure_schema(&directory_pool).await {
        error!("Failed to prepare directory schema: {e:#}");
    }

    let state = AppState {
        showcase: Arc::new(SqliteShowcaseStore::new(showcase_pool.clone())),
        directory: Arc::new(SqliteDirectoryStore::new(directory_pool.clone())),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // In-flight requests are not drained on interrupt.
    tokio::select! {
        result = axum::serve(listener, app).into_future() => result?,
        _ = tokio::signal::ctrl_c() => info!("Interrupt received, shutting down"),
    }

    showcase_pool.close().await;
    directory_pool.close().await;
    info!("Database connections closed");

    Ok(())
}
