//! Tests for configuration validation

use std::collections::HashMap;
use std::time::Duration;

use ticker_regen_limiter::config::{LimiterConfig, MIN_INTERVAL_ENV};
use ticker_regen_limiter::core::LimiterError;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_default_is_one_hour() {
    let cfg = LimiterConfig::default();
    assert_eq!(cfg.min_interval_secs, 3600);
    assert_eq!(cfg.min_interval(), Duration::from_secs(3600));
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_zero_interval_invalid() {
    let cfg = LimiterConfig { min_interval_secs: 0 };
    assert!(matches!(cfg.validate(), Err(LimiterError::InvalidConfig(_))));
}

#[test]
fn test_from_json() {
    let cfg = LimiterConfig::from_json_str(r#"{ "min_interval_secs": 900 }"#).unwrap();
    assert_eq!(cfg.min_interval(), Duration::from_secs(900));
}

#[test]
fn test_from_json_defaults_missing_field() {
    let cfg = LimiterConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, LimiterConfig::default());
}

#[test]
fn test_from_json_rejects_garbage_and_zero() {
    assert!(matches!(
        LimiterConfig::from_json_str("not json"),
        Err(LimiterError::Parse(_))
    ));
    assert!(matches!(
        LimiterConfig::from_json_str(r#"{ "min_interval_secs": 0 }"#),
        Err(LimiterError::InvalidConfig(_))
    ));
}

#[test]
fn test_lookup_absent_uses_default() {
    let cfg = LimiterConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, LimiterConfig::default());
}

#[test]
fn test_lookup_override() {
    let cfg = LimiterConfig::from_lookup(lookup(&[(MIN_INTERVAL_ENV, " 120 ")])).unwrap();
    assert_eq!(cfg.min_interval_secs, 120);
}

#[test]
fn test_lookup_rejects_bad_values() {
    assert!(matches!(
        LimiterConfig::from_lookup(lookup(&[(MIN_INTERVAL_ENV, "soon")])),
        Err(LimiterError::Parse(_))
    ));
    assert!(matches!(
        LimiterConfig::from_lookup(lookup(&[(MIN_INTERVAL_ENV, "0")])),
        Err(LimiterError::InvalidConfig(_))
    ));
}

#[test]
fn test_from_env_reads_variable() {
    std::env::set_var(MIN_INTERVAL_ENV, "7");
    let cfg = LimiterConfig::from_env();
    std::env::remove_var(MIN_INTERVAL_ENV);
    assert_eq!(cfg.unwrap().min_interval_secs, 7);
}

#[test]
fn test_from_env_file_rejects_malformed_file() {
    let path = std::env::temp_dir().join(format!("regen-limiter-{}.env", uuid::Uuid::new_v4()));
    std::fs::write(&path, "REGEN_LIMITER_UNUSED='unterminated\n").unwrap();
    let result = LimiterConfig::from_env_file(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(LimiterError::Parse(_))));
}

#[test]
fn test_from_env_file_missing_is_fine() {
    let path = std::env::temp_dir().join(format!("regen-limiter-{}.env", uuid::Uuid::new_v4()));
    assert!(LimiterConfig::from_env_file(&path).is_ok());
}
