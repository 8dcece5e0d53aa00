//! DhanKanya Landing HTTP Server
//!
//! Axum-based server hosting the WASM landing page and the content API
//! it loads its copy from.

mod config;
mod handlers;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::routes::build_router;
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

    // Content is validated once here; a bad override file stops startup
    let content = config.load_content()?;
    match &config.content_path {
        Some(path) => tracing::info!("✓ Content loaded from {}", path.display()),
        None => tracing::info!("✓ Using bundled content"),
    }
    tracing::info!(
        "  {} FAQ entries, {} pricing tiers",
        content.faqs.len(),
        content.pricing.len()
    );

    if !config.static_dir.exists() {
        tracing::warn!("⚠ Static directory {} not found", config.static_dir.display());
        tracing::warn!("  Build the frontend with: trunk build --release");
    }

    let app = build_router(AppState::new(content), &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 landing server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  GET  /api/content  - Landing page content");
    tracing::info!("  GET  /*            - Static frontend ({})", config.static_dir.display());
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
