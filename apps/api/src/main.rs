mod config;
mod errors;
mod layout;
mod models;
mod render;
mod richtext;
mod routes;
mod sanitize;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::{default_template, TemplateAssets};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-docx v{}", env!("CARGO_PKG_VERSION"));

    // Template description is fixed; the images are optional and loaded once.
    let template = default_template();
    let assets = TemplateAssets::load_dir(&config.assets_dir, template.branding.watermark_opacity);
    info!(
        "Template: {} {}x{}in, auto layout threshold {}",
        template.font_family,
        template.page.width_in,
        template.page.height_in,
        template.limits.multi_page_threshold
    );

    // Build app state
    let state = AppState {
        template: Arc::new(template),
        assets: Arc::new(assets),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
