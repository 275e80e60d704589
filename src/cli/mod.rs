//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for FluxiMed using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// FluxiMed - clinic dashboard for the AI messaging platform
#[derive(Parser, Debug)]
#[command(name = "fluximed")]
#[command(version, about, long_about = None)]
#[command(author = "FluxiMed Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "fluximed.toml", env = "FLUXIMED_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FLUXIMED_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the clinic overview
    Dashboard(commands::dashboard::DashboardArgs),

    /// Show one clinic and its conversations
    Show(commands::show::ShowArgs),

    /// Register a new clinic
    Create(commands::create::CreateArgs),

    /// Browse and manage clinics interactively
    Interactive(commands::interactive::InteractiveArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_dashboard() {
        let cli = Cli::parse_from(["fluximed", "dashboard"]);
        assert_eq!(cli.config, "fluximed.toml");
        assert!(matches!(cli.command, Commands::Dashboard(ref a) if a.search.is_none()));
    }

    #[test]
    fn test_cli_parse_dashboard_search() {
        let cli = Cli::parse_from(["fluximed", "dashboard", "--search", "norte"]);
        match cli.command {
            Commands::Dashboard(args) => assert_eq!(args.search.as_deref(), Some("norte")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "fluximed",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "dashboard",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_show() {
        let cli = Cli::parse_from(["fluximed", "show", "clinica-01", "--chat", "Maria Silva"]);
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.clinic_id, "clinica-01");
                assert_eq!(args.chat.as_deref(), Some("Maria Silva"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_create() {
        let cli = Cli::parse_from([
            "fluximed",
            "create",
            "--id",
            "clinica-04",
            "--name",
            "Clínica Norte",
            "--phone",
            "(11) 66666-6666",
            "--prompt",
            "Seja empático.",
            "--monthly-limit",
            "2000",
        ]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.id, "clinica-04");
                assert_eq!(args.monthly_limit, "2000");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_create_defaults() {
        let cli = Cli::parse_from(["fluximed", "create", "--id", "x"]);
        match cli.command {
            Commands::Create(args) => {
                assert!(args.name.is_empty());
                assert_eq!(args.monthly_limit, "1000");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_other_commands() {
        let cli = Cli::parse_from(["fluximed", "interactive"]);
        assert!(matches!(cli.command, Commands::Interactive(_)));

        let cli = Cli::parse_from(["fluximed", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));

        let cli = Cli::parse_from(["fluximed", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref a) if a.force));
    }
}
