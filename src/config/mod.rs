//! Configuration management for FluxiMed.
//!
//! FluxiMed reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `FLUXIMED_<SECTION>_<KEY>` environment overrides
//! - Defaults for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fluximed::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("fluximed.toml")?;
//! println!("Backend: {}", config.data_source.base_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "development"
//!
//! [application]
//! log_level = "info"
//!
//! [data_source]
//! base_url = "http://localhost:8000"
//! clinics_path = "/clinicas"
//! timeout_seconds = 10
//!
//! [auth]
//! user = "admin@fluximed.com"
//! token = "${FLUXIMED_SESSION_TOKEN}"
//! login_route = "/auth"
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, AuthConfig, DashboardConfig, DataSourceConfig, Environment, LoggingConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
