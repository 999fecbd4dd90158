//! Tests for error types

use ticker_regen_limiter::core::LimiterError;

#[test]
fn test_invalid_config_error() {
    let err = LimiterError::InvalidConfig("min_interval_secs must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid config: min_interval_secs must be greater than 0"
    );
}

#[test]
fn test_parse_error() {
    let err = LimiterError::Parse("expected value".to_string());
    assert_eq!(format!("{}", err), "parse error: expected value");
}

#[test]
fn test_converts_into_anyhow() {
    let err: anyhow::Error = LimiterError::Parse("bad".to_string()).into();
    assert!(err.downcast_ref::<LimiterError>().is_some());
}
