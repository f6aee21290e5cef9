//! Request counting middleware
//!
//! Increments `http_requests_total` for every inbound request before
//! route dispatch, regardless of path or outcome. The `/metrics` scrape
//! itself is counted too.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use pikade_core::RequestMetrics;

/// Middleware that counts the request and unconditionally continues to
/// the next stage. It never short-circuits.
pub async fn count_requests(
    State(metrics): State<RequestMetrics>,
    request: Request,
    next: Next,
) -> Response {
    metrics.increment();
    next.run(request).await
}
