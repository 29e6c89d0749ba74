//! HTTP Handlers

use axum::{extract::State, Json};
use nema_core::SiteMeta;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub site: &'static str,
    /// Whether the built page is on disk
    pub bundle_present: bool,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let bundle_present = tokio::fs::metadata(state.config.index_file())
        .await
        .is_ok_and(|meta| meta.is_file());
    if !bundle_present {
        tracing::warn!(dir = %state.config.static_dir.display(), "index.html missing");
    }

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        site: SiteMeta::nema().site_name,
        bundle_present,
    })
}
