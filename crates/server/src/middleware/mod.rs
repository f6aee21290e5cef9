//! HTTP middleware

pub mod metrics;

pub use metrics::count_requests;
