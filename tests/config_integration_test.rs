//! Integration tests for configuration loading and validation
//!
//! Tests that touch environment variables hold `ENV_MUTEX`.

use fluximed::config::{load_config, Environment};
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("FLUXIMED_APPLICATION_LOG_LEVEL");
    std::env::remove_var("FLUXIMED_ENVIRONMENT");
    std::env::remove_var("FLUXIMED_DATA_SOURCE_BASE_URL");
    std::env::remove_var("FLUXIMED_DATA_SOURCE_TIMEOUT_SECONDS");
    std::env::remove_var("FLUXIMED_AUTH_USER");
    std::env::remove_var("FLUXIMED_AUTH_TOKEN");
    std::env::remove_var("TEST_FLUXIMED_SESSION_TOKEN");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
environment = "staging"

[application]
log_level = "debug"

[data_source]
base_url = "https://api.fluximed.example/"
clinics_path = "/clinicas"
timeout_seconds = 30

[auth]
user = "operadora@fluximed"
token = "session-123"
login_route = "/login"

[logging]
local_enabled = true
local_path = "/tmp/fluximed"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.environment, Environment::Staging);
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.data_source.timeout_seconds, 30);
    assert_eq!(
        config.data_source.clinics_url().unwrap().as_str(),
        "https://api.fluximed.example/clinicas"
    );
    assert_eq!(config.auth.user.as_deref(), Some("operadora@fluximed"));
    assert_eq!(
        config.auth.token.as_ref().unwrap().expose_secret().as_ref(),
        "session-123"
    );
    assert_eq!(config.auth.login_route, "/login");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_substitution_in_token() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_FLUXIMED_SESSION_TOKEN", "from-env");

    let file = write_config(
        r#"
[auth]
user = "ana"
token = "${TEST_FLUXIMED_SESSION_TOKEN}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.auth.token.as_ref().unwrap().expose_secret().as_ref(),
        "from-env"
    );

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[auth]\ntoken = \"${TEST_FLUXIMED_SESSION_TOKEN}\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_FLUXIMED_SESSION_TOKEN"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("FLUXIMED_DATA_SOURCE_BASE_URL", "http://127.0.0.1:9000");
    std::env::set_var("FLUXIMED_DATA_SOURCE_TIMEOUT_SECONDS", "45");
    std::env::set_var("FLUXIMED_AUTH_USER", "override-user");
    std::env::set_var("FLUXIMED_AUTH_TOKEN", "override-token");

    let file = write_config("[data_source]\nbase_url = \"http://localhost:8000\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.data_source.base_url, "http://127.0.0.1:9000");
    assert_eq!(config.data_source.timeout_seconds, 45);
    assert_eq!(config.auth.user.as_deref(), Some("override-user"));
    assert!(config.auth.token.is_some());

    cleanup_env_vars();
}

#[test]
fn test_production_rejects_plain_http_remote() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        "environment = \"production\"\n[data_source]\nbase_url = \"http://api.fluximed.example\"\n",
    );
    assert!(load_config(file.path()).is_err());

    let file = write_config(
        "environment = \"production\"\n[data_source]\nbase_url = \"http://localhost:8000\"\n",
    );
    assert!(load_config(file.path()).is_ok());
}

#[test]
fn test_invalid_values_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[data_source]\ntimeout_seconds = 301\n");
    assert!(load_config(file.path()).is_err());

    let file = write_config("[application]\nlog_level = \"loud\"\n");
    assert!(load_config(file.path()).is_err());

    let file = write_config("[logging]\nlocal_rotation = \"weekly\"\n");
    assert!(load_config(file.path()).is_err());
}
