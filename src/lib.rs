//! # Ticker Regeneration Limiter
//!
//! A per-ticker cooldown guard for alarm schedule regeneration.
//!
//! Tickers (alarms, countdowns, sleep schedules) occasionally need their
//! underlying alarm triggers recomputed. Left unchecked, bursts of edits or
//! OS callbacks can regenerate the same ticker over and over. The
//! [`RegenerationRateLimiter`](core::RegenerationRateLimiter) enforces a
//! minimum interval (one hour by default) between regenerations of the same
//! ticker, with a `force` flag for explicit user actions.
//!
//! ## Key Features
//!
//! - **Concurrent reads, exclusive writes**: history lives behind a `parking_lot::RwLock`
//! - **Injected, not global**: hosts own the limiter and share it by `Arc`
//! - **Injected time**: a [`Clock`](util::Clock) seam makes cooldowns testable
//! - **Workflow seam**: [`RegenerationGuard`](core::RegenerationGuard) wraps a host scheduler
//!
//! ```rust
//! use std::sync::Arc;
//! use ticker_regen_limiter::builders::LimiterBuilder;
//! use ticker_regen_limiter::config::LimiterConfig;
//! use ticker_regen_limiter::core::{AppResult, RegenerationGuard, RegenerationOutcome};
//! use ticker_regen_limiter::util::TickerId;
//!
//! let limiter = Arc::new(LimiterBuilder::from_config(&LimiterConfig::default()).build()?);
//! let guard = RegenerationGuard::new(limiter, |_id: TickerId| -> AppResult<()> { Ok(()) });
//!
//! let id = TickerId::new_v4();
//! assert_eq!(guard.regenerate(id, false)?, RegenerationOutcome::Regenerated);
//! assert!(matches!(guard.regenerate(id, false)?, RegenerationOutcome::Throttled { .. }));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Cooldown accounting and the regeneration workflow seam.
pub mod core;
/// Configuration models.
pub mod config;
/// Builders to construct limiters from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
