//! Limiter configuration structures.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::LimiterError;
use crate::core::limiter::DEFAULT_MIN_INTERVAL;

/// Environment variable overriding the cooldown, in seconds.
pub const MIN_INTERVAL_ENV: &str = "TICKER_REGEN_MIN_INTERVAL_SECS";

/// Limiter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimiterConfig {
    /// Minimum seconds between regenerations of the same ticker.
    #[serde(default = "default_min_interval_secs")]
    pub min_interval_secs: u64,
}

const fn default_min_interval_secs() -> u64 {
    DEFAULT_MIN_INTERVAL.as_secs()
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            min_interval_secs: default_min_interval_secs(),
        }
    }
}

impl LimiterConfig {
    /// Cooldown as a `Duration`.
    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        Duration::from_secs(self.min_interval_secs)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`LimiterError::InvalidConfig`] when the interval is zero.
    pub fn validate(&self) -> Result<(), LimiterError> {
        if self.min_interval_secs == 0 {
            return Err(LimiterError::InvalidConfig(
                "min_interval_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns [`LimiterError::Parse`] on malformed JSON, or the validation error.
    pub fn from_json_str(input: &str) -> Result<Self, LimiterError> {
        let cfg: Self =
            serde_json::from_str(input).map_err(|e| LimiterError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from the process environment, reading `.env` first if present.
    ///
    /// # Errors
    ///
    /// Returns [`LimiterError::Parse`] if a `.env` file exists but is malformed,
    /// or if [`MIN_INTERVAL_ENV`] is not an integer; otherwise the validation error.
    pub fn from_env() -> Result<Self, LimiterError> {
        load_dotenv(dotenvy::dotenv().map(|_| ()))?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`LimiterConfig::from_env`], reading the given env file instead of `.env`.
    ///
    /// # Errors
    ///
    /// Same as [`LimiterConfig::from_env`]. A missing file is not an error.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, LimiterError> {
        load_dotenv(dotenvy::from_path(path))?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Same as [`LimiterConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LimiterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(MIN_INTERVAL_ENV) {
            cfg.min_interval_secs = raw
                .trim()
                .parse()
                .map_err(|e| LimiterError::Parse(format!("{MIN_INTERVAL_ENV}={raw:?}: {e}")))?;
        }
        cfg.validate()?;
        tracing::debug!(min_interval_secs = cfg.min_interval_secs, "limiter config loaded");
        Ok(cfg)
    }
}

fn load_dotenv(result: Result<(), dotenvy::Error>) -> Result<(), LimiterError> {
    match result {
        Err(e) if !e.not_found() => Err(LimiterError::Parse(format!("env file: {e}"))),
        _ => Ok(()),
    }
}
