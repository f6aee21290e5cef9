//! Request counter registry with Prometheus text exposition.

use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

use crate::error::MetricsError;

/// Content type of the Prometheus text exposition format (version 0.0.4).
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

const COUNTER_NAME: &str = "http_requests_total";
const COUNTER_HELP: &str = "Total number of HTTP requests received";

/// Registry holding the process-wide request counter.
///
/// Clones share the same underlying counter, so one instance can be
/// handed to the middleware layer and another to the `/metrics` handler.
/// The counter increments atomically; concurrent requests never lose
/// updates.
#[derive(Clone)]
pub struct RequestMetrics {
    registry: Registry,
    requests_total: IntCounter,
}

impl RequestMetrics {
    /// Create a fresh registry with `http_requests_total` at zero.
    ///
    /// Registration can only fail on a duplicate metric name, which a
    /// fresh registry rules out, but the error is surfaced rather than
    /// swallowed.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let requests_total =
            IntCounter::new(COUNTER_NAME, COUNTER_HELP).map_err(MetricsError::Registration)?;
        registry
            .register(Box::new(requests_total.clone()))
            .map_err(MetricsError::Registration)?;

        Ok(Self {
            registry,
            requests_total,
        })
    }

    /// Count one inbound request. Infallible, side effect only.
    pub fn increment(&self) {
        self.requests_total.inc();
    }

    /// Current counter value.
    pub fn value(&self) -> u64 {
        self.requests_total.get()
    }

    /// Render the registry in the Prometheus text exposition format:
    ///
    /// ```text
    /// # HELP http_requests_total Total number of HTTP requests received
    /// # TYPE http_requests_total counter
    /// http_requests_total <value>
    /// ```
    pub fn encode(&self) -> Result<String, MetricsError> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(MetricsError::Encoding)?;
        Ok(String::from_utf8(buffer)?)
    }
}
