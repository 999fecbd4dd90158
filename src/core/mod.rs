//! Cooldown accounting and the regeneration workflow seam.

pub mod error;
pub mod guard;
pub mod limiter;

pub use error::{AppResult, LimiterError};
pub use guard::{RegenerationGuard, RegenerationOutcome, ScheduleRegenerator};
pub use limiter::{RegenerationClaim, RegenerationRateLimiter, RegenerationStatus, DEFAULT_MIN_INTERVAL};
