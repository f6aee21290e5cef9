//! Server configuration

use thiserror::Error;

/// Default TCP port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration loaded from environment variables
pub struct Config {
    pub port: u16,
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT is not a valid TCP port: {0:?}")]
    InvalidPort(String),
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `PORT` is optional and defaults to 8080; a value that is set but
    /// not a valid port number is a fatal configuration error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}
