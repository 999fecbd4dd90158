//! Per-ticker regeneration cooldown.
//!
//! [`RegenerationRateLimiter`] maps a [`TickerId`] to the instant its alarm
//! schedule was last regenerated and answers whether another regeneration is
//! permitted yet. A ticker with no entry has never been regenerated and is
//! always permitted.
//!
//! The map sits behind a `parking_lot::RwLock`: queries share the read lock,
//! mutations take the write lock and are visible to every query issued after
//! they return.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use ticker_regen_limiter::core::RegenerationRateLimiter;
//! use ticker_regen_limiter::util::{ManualClock, TickerId};
//!
//! let clock = Arc::new(ManualClock::new());
//! let limiter = RegenerationRateLimiter::with_clock(Duration::from_secs(3600), clock.clone());
//! let id = TickerId::new_v4();
//!
//! assert!(limiter.can_regenerate(&id, false));
//! limiter.record_regeneration(id);
//! assert!(!limiter.can_regenerate(&id, false));
//! assert!(limiter.can_regenerate(&id, true));
//!
//! clock.advance(Duration::from_secs(3600));
//! assert!(limiter.can_regenerate(&id, false));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::util::clock::{Clock, SystemClock};
use crate::util::ids::TickerId;

/// Cooldown applied when none is configured.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Regeneration state of one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerationStatus {
    /// A regeneration may run now.
    Allowed,
    /// The ticker is cooling down.
    Throttled {
        /// Wait before the next permitted regeneration.
        remaining: Duration,
    },
}

impl RegenerationStatus {
    /// Whether a regeneration may run now.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

impl fmt::Display for RegenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed => write!(f, "regeneration allowed"),
            Self::Throttled { remaining } => {
                // Round up so a throttled ticker never reports "0s".
                let secs = remaining
                    .as_secs()
                    .saturating_add(u64::from(remaining.subsec_nanos() > 0));
                let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
                write!(f, "next regeneration allowed in ")?;
                if h > 0 {
                    write!(f, "{h}h {m}m {s}s")
                } else if m > 0 {
                    write!(f, "{m}m {s}s")
                } else {
                    write!(f, "{s}s")
                }
            }
        }
    }
}

/// Slot taken by [`RegenerationRateLimiter::try_begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RegenerationClaim {
    id: TickerId,
    claimed_at: Instant,
    previous: Option<Instant>,
}

impl RegenerationClaim {
    /// Ticker the claim belongs to.
    #[must_use]
    pub const fn ticker_id(&self) -> TickerId {
        self.id
    }
}

/// Throttles schedule regeneration per ticker.
///
/// Share across threads with `Arc`; every method takes `&self`.
pub struct RegenerationRateLimiter {
    min_interval: Duration,
    clock: Arc<dyn Clock>,
    history: RwLock<HashMap<TickerId, Instant>>,
}

impl RegenerationRateLimiter {
    /// Create a limiter on the system clock.
    ///
    /// A zero interval never throttles.
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self::with_clock(min_interval, Arc::new(SystemClock))
    }

    /// Create a limiter on a caller-supplied clock.
    #[must_use]
    pub fn with_clock(min_interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            min_interval,
            clock,
            history: RwLock::new(HashMap::new()),
        }
    }

    /// Configured cooldown between regenerations of the same ticker.
    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Whether `id` may be regenerated now. `force` bypasses the cooldown.
    #[must_use]
    pub fn can_regenerate(&self, id: &TickerId, force: bool) -> bool {
        if force {
            debug!(ticker_id = %id, "forced regeneration bypasses cooldown");
            return true;
        }
        let remaining = self.time_until_next_allowed(id);
        if remaining.is_zero() {
            true
        } else {
            debug!(ticker_id = %id, remaining_secs = remaining.as_secs(), "regeneration throttled");
            false
        }
    }

    /// Stamp `id` as regenerated now, replacing any earlier record.
    pub fn record_regeneration(&self, id: TickerId) {
        let mut history = self.history.write();
        // Read under the lock so stored timestamps never move backwards.
        history.insert(id, self.clock.now());
        drop(history);
        debug!(ticker_id = %id, "regeneration recorded");
    }

    /// Check and claim a regeneration slot for `id` in one step.
    ///
    /// On success the cooldown starts immediately, so concurrent callers for
    /// the same ticker are throttled while the claim is outstanding. Hand the
    /// claim back to [`abort`](Self::abort) if the regeneration fails.
    ///
    /// # Errors
    ///
    /// Returns the remaining wait when the ticker is cooling down and `force` is not set.
    pub fn try_begin(&self, id: TickerId, force: bool) -> Result<RegenerationClaim, Duration> {
        let mut history = self.history.write();
        let now = self.clock.now();
        let previous = history.get(&id).copied();
        if !force {
            if let Some(last) = previous {
                let remaining = self
                    .min_interval
                    .saturating_sub(now.saturating_duration_since(last));
                if !remaining.is_zero() {
                    drop(history);
                    debug!(ticker_id = %id, remaining_secs = remaining.as_secs(), "regeneration throttled");
                    return Err(remaining);
                }
            }
        }
        history.insert(id, now);
        drop(history);
        if force {
            debug!(ticker_id = %id, "forced regeneration bypasses cooldown");
        }
        Ok(RegenerationClaim {
            id,
            claimed_at: now,
            previous,
        })
    }

    /// Release a claim whose regeneration did not happen.
    ///
    /// Restores the record that preceded the claim, unless a newer record or
    /// claim has replaced it since.
    pub fn abort(&self, claim: RegenerationClaim) {
        let mut history = self.history.write();
        if history.get(&claim.id) != Some(&claim.claimed_at) {
            return;
        }
        match claim.previous {
            Some(previous) => history.insert(claim.id, previous),
            None => history.remove(&claim.id),
        };
        drop(history);
        debug!(ticker_id = %claim.id, "regeneration claim released");
    }

    /// Wait before `id` may be regenerated; zero when permitted now.
    #[must_use]
    pub fn time_until_next_allowed(&self, id: &TickerId) -> Duration {
        let last = self.history.read().get(id).copied();
        last.map_or(Duration::ZERO, |last| {
            let elapsed = self.clock.now().saturating_duration_since(last);
            self.min_interval.saturating_sub(elapsed)
        })
    }

    /// Structured status for `id`.
    #[must_use]
    pub fn status(&self, id: &TickerId) -> RegenerationStatus {
        let remaining = self.time_until_next_allowed(id);
        if remaining.is_zero() {
            RegenerationStatus::Allowed
        } else {
            RegenerationStatus::Throttled { remaining }
        }
    }

    /// Human-readable status for diagnostics.
    #[must_use]
    pub fn describe_status(&self, id: &TickerId) -> String {
        self.status(id).to_string()
    }

    /// Forget the record for one ticker.
    pub fn clear_history(&self, id: &TickerId) {
        if self.history.write().remove(id).is_some() {
            debug!(ticker_id = %id, "regeneration history cleared");
        }
    }

    /// Forget every record.
    pub fn clear_all_history(&self) {
        let mut history = self.history.write();
        let cleared = history.len();
        history.clear();
        drop(history);
        info!(cleared, "all regeneration history cleared");
    }

    /// Number of tickers with a record.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.history.read().len()
    }

    /// Drop records whose cooldown has fully elapsed. Returns how many were removed.
    ///
    /// Decisions are unaffected: an elapsed record and a missing one both permit.
    pub fn prune_expired(&self) -> usize {
        let now = self.clock.now();
        let mut history = self.history.write();
        let before = history.len();
        history.retain(|_, last| now.saturating_duration_since(*last) < self.min_interval);
        let removed = before - history.len();
        drop(history);
        if removed > 0 {
            info!(removed, "pruned expired regeneration records");
        }
        removed
    }
}

impl Default for RegenerationRateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

impl fmt::Debug for RegenerationRateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegenerationRateLimiter")
            .field("min_interval", &self.min_interval)
            .field("tracked", &self.tracked_count())
            .finish_non_exhaustive()
    }
}
