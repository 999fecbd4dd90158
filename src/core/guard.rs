//! Regeneration workflow seam.
//!
//! The host's alarm scheduler implements [`ScheduleRegenerator`]. A
//! [`RegenerationGuard`] claims a slot on the shared limiter before each
//! regeneration, restamps it when the scheduler reports success and releases
//! it when the scheduler fails.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::core::error::AppResult;
use crate::core::limiter::RegenerationRateLimiter;
use crate::util::ids::TickerId;

/// Recomputes and reschedules a ticker's alarm triggers.
pub trait ScheduleRegenerator: Send + Sync {
    /// Regenerate the schedule for `id`.
    fn regenerate(&self, id: TickerId) -> AppResult<()>;
}

impl<F> ScheduleRegenerator for F
where
    F: Fn(TickerId) -> AppResult<()> + Send + Sync,
{
    fn regenerate(&self, id: TickerId) -> AppResult<()> {
        self(id)
    }
}

/// Result of a guarded regeneration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerationOutcome {
    /// The schedule was regenerated and the cooldown restarted.
    Regenerated,
    /// The ticker is cooling down; the regenerator was not called.
    Throttled {
        /// Wait before the next permitted attempt.
        retry_after: Duration,
    },
}

/// Couples a regenerator with the limiter it must respect.
pub struct RegenerationGuard<R> {
    limiter: Arc<RegenerationRateLimiter>,
    regenerator: R,
}

impl<R: ScheduleRegenerator> RegenerationGuard<R> {
    /// Create a guard over a shared limiter.
    pub const fn new(limiter: Arc<RegenerationRateLimiter>, regenerator: R) -> Self {
        Self {
            limiter,
            regenerator,
        }
    }

    /// Shared limiter.
    pub const fn limiter(&self) -> &Arc<RegenerationRateLimiter> {
        &self.limiter
    }

    /// Regenerate `id` if the cooldown allows it, or unconditionally when `force` is set.
    ///
    /// The slot is claimed before the regenerator runs, so concurrent calls for
    /// the same ticker see it as throttled and do not run the regenerator.
    ///
    /// # Errors
    ///
    /// Propagates the regenerator's error. The claim is released in that case,
    /// so the next attempt is not throttled by a failed one.
    pub fn regenerate(&self, id: TickerId, force: bool) -> AppResult<RegenerationOutcome> {
        let claim = match self.limiter.try_begin(id, force) {
            Ok(claim) => claim,
            Err(retry_after) => return Ok(RegenerationOutcome::Throttled { retry_after }),
        };
        if let Err(err) = self.regenerator.regenerate(id) {
            warn!(ticker_id = %id, error = %err, "schedule regeneration failed");
            self.limiter.abort(claim);
            return Err(err);
        }
        self.limiter.record_regeneration(id);
        Ok(RegenerationOutcome::Regenerated)
    }

    /// Deletion hook: forget the ticker's history.
    pub fn ticker_deleted(&self, id: &TickerId) {
        debug!(ticker_id = %id, "ticker deleted");
        self.limiter.clear_history(id);
    }
}
