//! Application error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pikade_core::MetricsError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Internal(msg) = self;
        tracing::error!(error = %msg, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
    }
}

impl From<MetricsError> for AppError {
    fn from(err: MetricsError) -> Self {
        AppError::Internal(format!("Metrics encoding error: {}", err))
    }
}
