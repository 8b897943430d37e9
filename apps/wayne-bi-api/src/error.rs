//! Error types for the BI API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use wayne_bi_core::ReportError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Report computation failed: {0}")]
    Report(#[from] ReportError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Report(e) => {
                tracing::error!("Report computation failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to generate report: {}", e),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
