//! Prometheus metrics endpoint

use axum::{extract::State, http::header, response::IntoResponse};
use pikade_core::{EXPOSITION_CONTENT_TYPE, RequestMetrics};

use crate::error::AppError;

/// GET /metrics - Render the request counter in Prometheus text format
pub async fn get(State(metrics): State<RequestMetrics>) -> Result<impl IntoResponse, AppError> {
    let body = metrics.encode()?;
    Ok(([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], body))
}
