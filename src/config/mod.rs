//! Configuration models for the regeneration limiter.

pub mod limiter;

pub use limiter::{LimiterConfig, MIN_INTERVAL_ENV};
