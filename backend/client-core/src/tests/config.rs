// Unit tests for config load/save/validate and base URL resolution

use crate::config::{API_URL_ENV, AppConfig, CONFIG_DIR_ENV, DEFAULT_API_BASE_URL, config_dir};

use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

#[test]
fn given_no_config_file_when_loaded_then_defaults() {
    let dir = TempDir::new().unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.api.timeout_secs, 30);
}

/// **VALUE**: Save then load preserves every field.
///
/// **WHY THIS MATTERS**: A backend URL that silently resets forces users to reconfigure.
///
/// **BUG THIS CATCHES**: Would catch a field missing `#[serde(default)]` or a rename bug.
#[test]
fn given_saved_config_when_loaded_then_values_preserved() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.api.base_url = Some("https://api.finoxa.example".to_string());
    config.api.timeout_secs = 10;

    config.save(dir.path()).unwrap();
    let loaded = AppConfig::load(dir.path()).unwrap();

    assert_eq!(loaded, config);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn given_corrupt_file_when_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{\"version\": ").unwrap();

    let err = AppConfig::load(dir.path()).unwrap_err();

    assert!(format!("{err}").contains("Config Parse Error"));
}

/// **VALUE**: Non-HTTP base URLs are rejected before any request is built.
///
/// **WHY THIS MATTERS**: A URL like `localhost:8000` parses as scheme `localhost` and every
/// request would fail with an obscure error.
///
/// **BUG THIS CATCHES**: Would catch validation being skipped on save.
#[test]
fn given_schemeless_url_when_saved_then_validation_error() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.api.base_url = Some("localhost:8000".to_string());

    let err = config.save(dir.path()).unwrap_err();

    assert!(format!("{err}").contains("Invalid URL format"));
}

#[test]
fn given_future_version_when_validated_then_error() {
    let config = AppConfig {
        version: 99,
        ..AppConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn given_zero_timeout_when_validated_then_error() {
    let mut config = AppConfig::default();
    config.api.timeout_secs = 0;

    assert!(config.validate().is_err());
}

/// **VALUE**: The environment variable wins over the config file.
///
/// **WHY THIS MATTERS**: Deployments point the client at a backend through the
/// environment, like a build-time API URL.
///
/// **BUG THIS CATCHES**: Would catch the precedence order being reversed.
#[test]
#[serial]
fn given_env_and_file_url_when_resolving_then_env_wins() {
    let mut config = AppConfig::default();
    config.api.base_url = Some("https://from-file.example".to_string());

    unsafe { std::env::set_var(API_URL_ENV, "https://from-env.example") };
    let resolved = config.resolve_base_url();
    unsafe { std::env::remove_var(API_URL_ENV) };

    assert_eq!(resolved.unwrap(), "https://from-env.example");
}

#[test]
#[serial]
fn given_no_env_when_resolving_then_file_then_default() {
    unsafe { std::env::remove_var(API_URL_ENV) };

    let mut config = AppConfig::default();
    assert_eq!(config.resolve_base_url().unwrap(), DEFAULT_API_BASE_URL);

    config.api.base_url = Some("https://from-file.example".to_string());
    assert_eq!(config.resolve_base_url().unwrap(), "https://from-file.example");
}

#[test]
#[serial]
fn given_invalid_env_url_when_resolving_then_validation_error() {
    unsafe { std::env::set_var(API_URL_ENV, "ftp://files.example") };
    let resolved = AppConfig::default().resolve_base_url();
    unsafe { std::env::remove_var(API_URL_ENV) };

    assert!(resolved.is_err());
}

#[test]
#[serial]
fn given_config_dir_env_when_resolving_dir_then_env_path_used() {
    unsafe { std::env::set_var(CONFIG_DIR_ENV, "/tmp/finoxa-test-config") };
    let dir = config_dir();
    unsafe { std::env::remove_var(CONFIG_DIR_ENV) };

    assert_eq!(dir.unwrap(), PathBuf::from("/tmp/finoxa-test-config"));
}

#[test]
fn given_default_base_url_when_inspected_then_local_backend() {
    assert_eq!(DEFAULT_API_BASE_URL, "http://127.0.0.1:8000");
}
