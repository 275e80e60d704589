//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{DashboardConfig, Environment};
use super::secret::secret_string;
use crate::domain::errors::DashboardError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DashboardConfig
/// 4. Applies environment variable overrides (FLUXIMED_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use fluximed::config::loader::load_config;
///
/// let config = load_config("fluximed.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DashboardConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DashboardError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DashboardError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: DashboardConfig = toml::from_str(&contents)
        .map_err(|e| DashboardError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        DashboardError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| DashboardError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DashboardError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using FLUXIMED_* prefix
///
/// Environment variables follow the pattern: FLUXIMED_<SECTION>_<KEY>
/// For example: FLUXIMED_DATA_SOURCE_BASE_URL, FLUXIMED_AUTH_TOKEN
fn apply_env_overrides(config: &mut DashboardConfig) -> Result<()> {
    if let Ok(val) = std::env::var("FLUXIMED_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("FLUXIMED_ENVIRONMENT") {
        config.environment = match val.to_lowercase().as_str() {
            "development" => Environment::Development,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                return Err(DashboardError::Configuration(format!(
                    "Invalid FLUXIMED_ENVIRONMENT '{other}'. Must be one of: development, staging, production"
                )))
            }
        };
    }

    // Data source overrides
    if let Ok(val) = std::env::var("FLUXIMED_DATA_SOURCE_BASE_URL") {
        config.data_source.base_url = val;
    }
    if let Ok(val) = std::env::var("FLUXIMED_DATA_SOURCE_CLINICS_PATH") {
        config.data_source.clinics_path = val;
    }
    if let Ok(val) = std::env::var("FLUXIMED_DATA_SOURCE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.data_source.timeout_seconds = timeout;
        }
    }

    // Auth overrides
    if let Ok(val) = std::env::var("FLUXIMED_AUTH_USER") {
        config.auth.user = Some(val);
    }
    if let Ok(val) = std::env::var("FLUXIMED_AUTH_TOKEN") {
        config.auth.token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("FLUXIMED_AUTH_LOGIN_ROUTE") {
        config.auth.login_route = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("FLUXIMED_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("FLUXIMED_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("FLUXIMED_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
