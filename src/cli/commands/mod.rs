//! CLI command implementations
//!
//! Exit codes shared by every command:
//!
//! | Code | Meaning                         |
//! |------|---------------------------------|
//! | 0    | Success                         |
//! | 1    | Validation or creation failure  |
//! | 2    | Configuration error             |
//! | 3    | Not signed in                   |
//! | 4    | Clinic or conversation not found|
//! | 5    | Fatal error                     |

pub mod create;
pub mod dashboard;
pub mod init;
pub mod interactive;
pub mod show;
pub mod validate;

use crate::adapters::auth::{require_session, ConfigSessionProvider, SessionProvider};
use crate::adapters::clinics::{ClinicDataSource, HttpClinicSource};
use crate::config::load_config;
use crate::core::notify::ConsoleNotifier;
use crate::domain::DashboardError;
use std::sync::Arc;

/// Everything a data command needs once configuration and session check out
pub(crate) struct CommandContext {
    pub data: ClinicDataSource,
    pub sessions: Arc<dyn SessionProvider>,
}

/// Loads configuration, wires the data source and checks the session
///
/// On failure the problem has already been printed and the exit code is
/// returned as the error.
pub(crate) fn prepare(config_path: &str) -> Result<CommandContext, i32> {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, config_path = %config_path, "Failed to load configuration");
            eprintln!("❌ Failed to load configuration file");
            eprintln!("   Error: {e}");
            return Err(2); // Configuration error exit code
        }
    };

    let source = match HttpClinicSource::new(&config.data_source) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Invalid data source configuration");
            eprintln!("   Error: {e}");
            return Err(exit_code(&e));
        }
    };

    let sessions: Arc<dyn SessionProvider> = Arc::new(ConfigSessionProvider::new(&config.auth));
    if let Err(e) = require_session(sessions.as_ref()) {
        report_signed_out(&e);
        return Err(exit_code(&e));
    }

    Ok(CommandContext {
        data: ClinicDataSource::new(Arc::new(source), Arc::new(ConsoleNotifier)),
        sessions,
    })
}

fn report_signed_out(err: &DashboardError) {
    if let DashboardError::Unauthenticated { login_route } = err {
        eprintln!("🔒 Not signed in");
        eprintln!("   Sign in at {login_route}");
    }
}

/// Maps an error onto the process exit code
pub fn exit_code(err: &DashboardError) -> i32 {
    match err {
        DashboardError::Validation(_) | DashboardError::DataSource(_) => 1,
        DashboardError::Configuration(_) => 2,
        DashboardError::Unauthenticated { .. } => 3,
        DashboardError::NotFound(_) => 4,
        DashboardError::Serialization(_) | DashboardError::Io(_) | DashboardError::Other(_) => 5,
    }
}
