//! pikade-server library crate
//!
//! Exposes `build_app` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod config;
mod error;
mod middleware;
pub mod routes;

use axum::{Router, middleware as axum_mw, routing::get};
use tower_http::trace::TraceLayer;

use pikade_core::RequestMetrics;

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port. The caller owns the `RequestMetrics`
/// instance; cloning it shares the underlying counter.
pub fn build_app(metrics: RequestMetrics) -> Router {
    // Layers run outermost-first, so the request counter (added last)
    // sees every request before route dispatch, 404s included.
    Router::new()
        .route("/", get(routes::greeting::get))
        .route("/health", get(routes::health::check))
        .route("/error", get(routes::error::get))
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics.clone())
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn_with_state(
            metrics,
            middleware::count_requests,
        ))
}
