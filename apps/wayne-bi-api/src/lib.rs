//! Router assembly for the Wayne Enterprises BI Dashboard API.
//!
//! Kept in the library target so integration tests can drive the router
//! in-process without binding a socket.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod state;

use state::AppState;

/// Build the full application router over a loaded state.
pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for the dashboard frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // One GET endpoint per report
        .route("/api/executive-summary", get(handlers::executive_summary))
        .route("/api/financial-overview", get(handlers::financial_overview))
        .route("/api/security-metrics", get(handlers::security_metrics))
        .route("/api/rd-status", get(handlers::rd_status))
        .route("/api/supply-chain", get(handlers::supply_chain))
        .route("/api/hr-analytics", get(handlers::hr_analytics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
