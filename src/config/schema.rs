//! Configuration schema types
//!
//! This module defines the configuration structure for FluxiMed. Every
//! section has defaults, so an empty file yields a usable development setup
//! pointed at a backend on localhost.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main FluxiMed configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Clinic backend connection
    #[serde(default)]
    pub data_source: DataSourceConfig,

    /// Session settings
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.data_source.validate(&self.environment)?;
        self.auth.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Clinic backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Base URL of the messaging backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the clinic collection resource
    #[serde(default = "default_clinics_path")]
    pub clinics_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            clinics_path: default_clinics_path(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl DataSourceConfig {
    /// Full URL of the clinic collection
    ///
    /// # Errors
    ///
    /// Returns an error if the combined URL does not parse
    pub fn clinics_url(&self) -> Result<Url, String> {
        let joined = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.clinics_path
        );
        Url::parse(&joined).map_err(|e| format!("Invalid data_source URL '{joined}': {e}"))
    }

    fn validate(&self, environment: &Environment) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("data_source.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("data_source.base_url must start with http:// or https://".to_string());
        }

        if !self.clinics_path.starts_with('/') {
            return Err(format!(
                "data_source.clinics_path must start with '/', got '{}'",
                self.clinics_path
            ));
        }

        if !(1..=300).contains(&self.timeout_seconds) {
            return Err(format!(
                "data_source.timeout_seconds must be between 1 and 300, got {}",
                self.timeout_seconds
            ));
        }

        let url = self.clinics_url()?;

        // Remote backends require TLS in production
        if *environment == Environment::Production && url.scheme() != "https" {
            let local = matches!(url.host_str(), Some("localhost") | Some("127.0.0.1"));
            if !local {
                return Err(
                    "data_source.base_url must use https:// in production environments \
                    unless the backend runs on localhost"
                        .to_string(),
                );
            }
        }

        Ok(())
    }
}

/// Session configuration
///
/// Stands in for the external auth provider: a user name plus a session
/// token. Without both, the dashboard is treated as signed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Signed-in user
    #[serde(default)]
    pub user: Option<String>,

    /// Session token
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub token: Option<SecretString>,

    /// Where to send operators who are not signed in
    #[serde(default = "default_login_route")]
    pub login_route: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            login_route: default_login_route(),
        }
    }
}

impl AuthConfig {
    fn validate(&self) -> Result<(), String> {
        if self.login_route.trim().is_empty() {
            return Err("auth.login_route cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_clinics_path() -> String {
    "/clinicas".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_login_route() -> String {
    "/auth".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
