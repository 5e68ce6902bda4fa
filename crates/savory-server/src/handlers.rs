//! HTTP Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use savory_core::content::SITE;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub site: &'static str,
    pub menu_items: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        site: SITE.name,
        menu_items: state.menu_items,
    })
}
