//! Wayne Enterprises BI Dashboard API Server
//!
//! Serves six read-only report endpoints over the datasets loaded at
//! startup, plus a liveness check.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use wayne_bi_api::{app, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wayne_bi_api=info".parse()?)
                .add_directive("wayne_bi_core=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Load datasets before accepting any traffic; a bad source aborts here.
    let data_dir = std::env::var("WAYNE_BI_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    info!("Loading datasets from {}", data_dir);
    let state = Arc::new(AppState::new(&data_dir)?);
    info!("Datasets loaded; report service ready");

    let app = app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting Wayne BI API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
