//! Simulated error endpoint

use axum::{http::StatusCode, response::IntoResponse};

/// Fixed body returned by the simulated error route.
pub const ERROR_BODY: &str = "Simulated error route!";

/// GET /error - Always return a 500 with a fixed body
///
/// Deliberate demo response, not an actual fault.
pub async fn get() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, ERROR_BODY)
}
