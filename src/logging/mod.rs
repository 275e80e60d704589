//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - configurable level (`[application] log_level`, `--log-level`, `RUST_LOG`)
//! - console output on stderr
//! - optional JSON files with rotation
//!
//! # Example
//!
//! ```no_run
//! use fluximed::logging::init_logging;
//! use fluximed::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(clinic_id = "clinica-01", "Clinic opened");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a completed clinic load
///
/// # Example
///
/// ```no_run
/// use fluximed::log_load_complete;
/// use std::time::Duration;
///
/// log_load_complete!("http://localhost:8000", 3, Duration::from_millis(120));
/// ```
#[macro_export]
macro_rules! log_load_complete {
    ($source:expr, $count:expr, $duration:expr) => {
        tracing::info!(
            source = %$source,
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Clinics loaded"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use fluximed::log_error_with_context;
/// use fluximed::domain::DashboardError;
///
/// let error = DashboardError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::{DashboardError, DataSourceError};
    use std::time::Duration;

    #[test]
    fn test_macros_expand_without_subscriber() {
        log_load_complete!("http://localhost:8000", 3usize, Duration::from_millis(5));

        let error: DashboardError = DataSourceError::Timeout("10s".to_string()).into();
        log_error_with_context!(&error, "Clinic load failed");
    }
}
