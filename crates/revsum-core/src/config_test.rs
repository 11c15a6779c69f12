use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn config_with(var: &str, value: &str) -> Result<AppConfig, ConfigError> {
    let mut map = HashMap::new();
    map.insert(var, value);
    build_app_config(lookup_from_map(&map))
}

#[test]
fn build_app_config_applies_defaults_on_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.reviews_base_url, DEFAULT_REVIEWS_BASE_URL);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "Mozilla/5.0");
    assert_eq!(cfg.page_size, 20);
    assert_eq!(cfg.page_delay_min_ms, 400);
    assert_eq!(cfg.page_delay_max_ms, 1100);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let result = config_with("REVSUM_BIND_ADDR", "not-a-socket-addr");
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REVSUM_BIND_ADDR"),
        "expected InvalidEnvVar(REVSUM_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn reviews_base_url_override() {
    let cfg = config_with("REVSUM_REVIEWS_BASE_URL", "http://127.0.0.1:9999/api/reviews").unwrap();
    assert_eq!(cfg.reviews_base_url, "http://127.0.0.1:9999/api/reviews");
}

#[test]
fn request_timeout_secs_override() {
    let cfg = config_with("REVSUM_REQUEST_TIMEOUT_SECS", "5").unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_secs_invalid() {
    let result = config_with("REVSUM_REQUEST_TIMEOUT_SECS", "soon");
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REVSUM_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(REVSUM_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn user_agent_override() {
    let cfg = config_with("REVSUM_USER_AGENT", "custom-agent/2.0").unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn page_size_override() {
    let cfg = config_with("REVSUM_PAGE_SIZE", "50").unwrap();
    assert_eq!(cfg.page_size, 50);
}

#[test]
fn page_size_zero_is_rejected() {
    let result = config_with("REVSUM_PAGE_SIZE", "0");
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REVSUM_PAGE_SIZE"),
        "expected InvalidEnvVar(REVSUM_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn page_delay_bounds_can_be_zeroed() {
    let mut map = HashMap::new();
    map.insert("REVSUM_PAGE_DELAY_MIN_MS", "0");
    map.insert("REVSUM_PAGE_DELAY_MAX_MS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_delay_min_ms, 0);
    assert_eq!(cfg.page_delay_max_ms, 0);
}

#[test]
fn page_delay_min_above_max_is_rejected() {
    let result = config_with("REVSUM_PAGE_DELAY_MIN_MS", "5000");
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REVSUM_PAGE_DELAY_MIN_MS"),
        "expected InvalidEnvVar(REVSUM_PAGE_DELAY_MIN_MS), got: {result:?}"
    );
}

#[test]
fn page_delay_max_invalid() {
    let result = config_with("REVSUM_PAGE_DELAY_MAX_MS", "-1");
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REVSUM_PAGE_DELAY_MAX_MS"),
        "expected InvalidEnvVar(REVSUM_PAGE_DELAY_MAX_MS), got: {result:?}"
    );
}
