//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&ScribeConfig::default()).is_ok());
}

#[test]
fn catches_non_http_base_url() {
    let mut config = ScribeConfig::default();
    config.api.base_url = "ftp://files.example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.base_url"));
}

#[test]
fn catches_relative_paths() {
    let mut config = ScribeConfig::default();
    config.api.save_chat_path = "api/save_chat".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.save_chat_path"));
    assert!(!err.contains("api.completion_path"));
}

#[test]
fn catches_zero_connect_timeout() {
    let mut config = ScribeConfig::default();
    config.api.connect_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.connect_timeout_secs"));
}

#[test]
fn request_timeout_checked_only_when_set() {
    let mut config = ScribeConfig::default();
    config.api.request_timeout_secs = None;
    assert!(validate(&config).is_ok());

    config.api.request_timeout_secs = Some(0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.request_timeout_secs"));
}

#[test]
fn catches_notification_capacity_out_of_range() {
    let mut config = ScribeConfig::default();
    config.notifications.capacity = 1000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("notifications.capacity"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ScribeConfig::default();
    config.palette.continue_context_chars = 0;
    config.notifications.capacity = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.continue_context_chars"));
    assert!(err.contains("notifications.capacity"));
    assert!(err.contains("; "));
}
