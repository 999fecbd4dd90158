//! Error types for limiter configuration and construction.

use thiserror::Error;

/// Errors produced while configuring or building a limiter.
///
/// The limiter's own operations never fail; only the edges that read
/// external input do.
#[derive(Debug, Error)]
pub enum LimiterError {
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// Configuration input could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
