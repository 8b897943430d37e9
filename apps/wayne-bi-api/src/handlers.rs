//! HTTP handlers for the BI API

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use wayne_bi_core::{
    ExecutiveSummary, FinancialOverview, HrAnalytics, RdStatus, SecurityMetrics,
    SupplyChainPerformance,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Root banner
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Wayne Enterprises BI Dashboard API" }))
}

/// Liveness check; no dependency on dataset state
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "Wayne Enterprises BI API" }))
}

/// Executive summary with key metrics
pub async fn executive_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ExecutiveSummary>, ApiError> {
    Ok(Json(state.service.executive_summary()?))
}

/// Financial performance data
pub async fn financial_overview(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FinancialOverview>, ApiError> {
    Ok(Json(state.service.financial_overview()?))
}

/// Security operations metrics
pub async fn security_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SecurityMetrics>, ApiError> {
    Ok(Json(state.service.security_metrics()?))
}

/// R&D portfolio status
pub async fn rd_status(State(state): State<Arc<AppState>>) -> Result<Json<RdStatus>, ApiError> {
    Ok(Json(state.service.rd_status()?))
}

/// Supply chain performance metrics
pub async fn supply_chain(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SupplyChainPerformance>, ApiError> {
    Ok(Json(state.service.supply_chain_performance()?))
}

/// HR analytics data
pub async fn hr_analytics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HrAnalytics>, ApiError> {
    Ok(Json(state.service.hr_analytics()?))
}
