//! pikade-core: request metrics registry and Prometheus exposition
//!
//! This crate owns the single piece of state the server has: the
//! `http_requests_total` counter. The HTTP layer in `pikade-server`
//! increments it from middleware and renders it at `/metrics`.

pub mod error;
pub mod metrics;

pub use error::MetricsError;
pub use metrics::{EXPOSITION_CONTENT_TYPE, RequestMetrics};
