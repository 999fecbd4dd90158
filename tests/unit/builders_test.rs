//! Tests for builder modules

use std::sync::Arc;
use std::time::Duration;

use ticker_regen_limiter::builders::LimiterBuilder;
use ticker_regen_limiter::config::LimiterConfig;
use ticker_regen_limiter::core::{LimiterError, DEFAULT_MIN_INTERVAL};
use ticker_regen_limiter::util::{ManualClock, TickerId};

#[test]
fn test_builder_defaults() {
    let limiter = LimiterBuilder::new().build().unwrap();
    assert_eq!(limiter.min_interval(), DEFAULT_MIN_INTERVAL);
    assert_eq!(limiter.tracked_count(), 0);
}

#[test]
fn test_builder_from_config() {
    let cfg = LimiterConfig { min_interval_secs: 30 };
    let limiter = LimiterBuilder::from_config(&cfg).build().unwrap();
    assert_eq!(limiter.min_interval(), Duration::from_secs(30));
}

#[test]
fn test_builder_rejects_zero_interval() {
    let err = LimiterBuilder::new()
        .min_interval(Duration::ZERO)
        .build()
        .unwrap_err();
    assert!(matches!(err, LimiterError::InvalidConfig(_)));
}

#[test]
fn test_builder_uses_injected_clock() {
    let clock = Arc::new(ManualClock::new());
    let limiter = LimiterBuilder::new()
        .min_interval(Duration::from_secs(60))
        .clock(clock.clone())
        .build()
        .unwrap();

    let id = TickerId::new_v4();
    limiter.record_regeneration(id);
    assert!(!limiter.can_regenerate(&id, false));
    clock.advance(Duration::from_secs(60));
    assert!(limiter.can_regenerate(&id, false));
}
