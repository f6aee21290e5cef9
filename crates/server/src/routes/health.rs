//! Health check endpoint

use axum::{Json, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: DateTime<Utc>,
}

/// GET /health - Report server liveness with the current time
///
/// There is no backing store to probe, so this always reports "UP";
/// the timestamp serializes as RFC 3339.
pub async fn check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "UP".to_string(),
        timestamp: Utc::now(),
    })
}
