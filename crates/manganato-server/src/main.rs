use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use manganato_client::ReqwestFetcher;
use manganato_core::{MangaService, SiteConfig};
use manganato_server::routes;
use manganato_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("manganato=info".parse()?))
        .with_target(false)
        .init();

    let port = std::env::var("MANGANATO_SERVER_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");

    let site = SiteConfig::from_env()?;
    let fetcher = ReqwestFetcher::from_env()?;
    tracing::info!(base_url = %site.base_url, chapter_url = %site.chapter_url, "Scraping");

    let state = Arc::new(AppState::new(MangaService::new(fetcher, site)));

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutdown signal received");
}
