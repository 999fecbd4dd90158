//! Shared utilities.

pub mod clock;
pub mod ids;
pub mod telemetry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ids::TickerId;
pub use telemetry::init_tracing;
