//! Savory HTTP Server
//!
//! Axum-based host for the landing page: serves the compiled WASM frontend
//! and a health check.

mod config;
mod handlers;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    if config.index_file().is_file() {
        tracing::info!("✓ Frontend found in {}", config.static_dir.display());
    } else {
        tracing::warn!("⚠ No index.html in {} - pages will 404", config.static_dir.display());
        tracing::warn!("  Build the frontend: trunk build --release --dist static crates/savory-web/index.html");
    }

    let state = AppState::new(config);
    let addr = state.config.bind_addr;
    tracing::info!("Featured menu: {} dishes", state.menu_items);

    let app = routes::router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🍔 savory server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  GET  /*      - Landing page (static frontend)");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
