//! Nema Static Host
//!
//! Axum server for the compiled landing page bundle. The page itself needs
//! no API; this only delivers files and reports health.

mod config;
mod handlers;
mod state;

use axum::{routing::get, Router};
use nema_core::SiteMeta;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::health_check;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    if tokio::fs::metadata(config.index_file()).await.is_err() {
        tracing::warn!("⚠ No bundle at {}", config.static_dir.display());
        tracing::warn!("  Build it first: (cd crates/nema-web && trunk build --release)");
    }

    let addr = config.bind_addr;
    let app = router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 {} running on http://{}", SiteMeta::nema().site_name, addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("  GET /health - Health check");
    tracing::info!("  GET /*      - Landing page bundle");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health route plus the bundle, with unknown paths falling back to
/// `index.html`
fn router(state: AppState) -> Router {
    let bundle = ServeDir::new(&state.config.static_dir)
        .fallback(ServeFile::new(state.config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
