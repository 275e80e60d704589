//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "fluximed.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing FluxiMed configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point [data_source] base_url at the clinic backend");
                println!("  2. Create a .env file with your session:");
                println!("     - FLUXIMED_AUTH_USER=<your login>");
                println!("     - FLUXIMED_AUTH_TOKEN=<session token>");
                println!("  3. Validate configuration: fluximed validate-config");
                println!("  4. Open the dashboard: fluximed dashboard");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    fn generate_config() -> String {
        r#"# FluxiMed Configuration File
# Clinic dashboard for the FluxiMed messaging platform

# development | staging | production
environment = "development"

[application]
# trace, debug, info, warn, error
log_level = "info"

[data_source]
# Backend that serves GET/POST {base_url}{clinics_path}
base_url = "http://localhost:8000"
clinics_path = "/clinicas"
# Per-request timeout (1-300)
timeout_seconds = 10

[auth]
# Both must be set to be signed in. FLUXIMED_AUTH_USER and
# FLUXIMED_AUTH_TOKEN override these, or use ${VAR} substitution.
# user = "operator@clinic"
# token = "${FLUXIMED_SESSION_TOKEN}"
login_route = "/auth"

[logging]
local_enabled = false
local_path = "logs"
# daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
