use thiserror::Error;

/// Metrics registry error types
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Metric registration failed: {0}")]
    Registration(#[source] prometheus::Error),

    #[error("Metric encoding failed: {0}")]
    Encoding(#[source] prometheus::Error),

    #[error("Encoded metrics are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
