//! Validate config command implementation
//!
//! This module implements the `validate-config` command for checking the
//! FluxiMed configuration file without contacting the backend.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match config.validate() {
            Ok(_) => {
                let clinics_url = config
                    .data_source
                    .clinics_url()
                    .map(|u| u.to_string())
                    .unwrap_or_else(|e| format!("invalid ({e})"));
                let signed_in = match (&config.auth.user, &config.auth.token) {
                    (Some(user), Some(_)) => format!("yes ({user})"),
                    _ => "no".to_string(),
                };

                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Environment: {:?}", config.environment);
                println!("  Log Level: {}", config.application.log_level);
                println!("  Clinics Endpoint: {clinics_url}");
                println!("  Timeout: {}s", config.data_source.timeout_seconds);
                println!("  Signed In: {signed_in}");
                println!("  Login Route: {}", config.auth.login_route);
                println!(
                    "  File Logging: {}",
                    if config.logging.local_enabled {
                        format!(
                            "{} ({})",
                            config.logging.local_path, config.logging.local_rotation
                        )
                    } else {
                        "disabled".to_string()
                    }
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
