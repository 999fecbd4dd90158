//! Builder for [`RegenerationRateLimiter`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::LimiterConfig;
use crate::core::{LimiterError, RegenerationRateLimiter, DEFAULT_MIN_INTERVAL};
use crate::util::clock::{Clock, SystemClock};

/// Assembles a limiter from configuration and an optional clock.
pub struct LimiterBuilder {
    min_interval: Duration,
    clock: Arc<dyn Clock>,
}

impl LimiterBuilder {
    /// Builder with the default one-hour interval on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_interval: DEFAULT_MIN_INTERVAL,
            clock: Arc::new(SystemClock),
        }
    }

    /// Builder seeded from configuration.
    #[must_use]
    pub fn from_config(cfg: &LimiterConfig) -> Self {
        Self::new().min_interval(cfg.min_interval())
    }

    /// Override the cooldown.
    #[must_use]
    pub fn min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Override the time source.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the limiter.
    ///
    /// # Errors
    ///
    /// Returns [`LimiterError::InvalidConfig`] for a zero interval.
    pub fn build(self) -> Result<RegenerationRateLimiter, LimiterError> {
        if self.min_interval.is_zero() {
            return Err(LimiterError::InvalidConfig(
                "min_interval must be greater than 0".into(),
            ));
        }
        Ok(RegenerationRateLimiter::with_clock(self.min_interval, self.clock))
    }
}

impl Default for LimiterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LimiterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LimiterBuilder")
            .field("min_interval", &self.min_interval)
            .finish_non_exhaustive()
    }
}
