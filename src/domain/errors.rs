//! Domain error types
//!
//! This module defines the error hierarchy for FluxiMed. Errors are
//! domain-specific and don't expose third-party types such as reqwest errors.

use thiserror::Error;

/// Main dashboard error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Clinic data source errors
    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),

    /// Creation form validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] FormError),

    /// No signed-in session
    #[error("Not signed in, authenticate at {login_route}")]
    Unauthenticated { login_route: String },

    /// A clinic or chat lookup found nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised by the clinic data source
///
/// These errors don't expose the HTTP client's own error types.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// Failed to reach the backend
    #[error("Failed to connect to clinic backend: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Payload could not be decoded into clinic records
    #[error("Invalid response from backend: {0}")]
    InvalidResponse(String),

    /// The backend already holds a clinic with this id
    #[error("Clinic already exists: {0}")]
    ClinicExists(String),
}

impl DataSourceError {
    /// Maps an HTTP status and body onto the error taxonomy
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status >= 500 {
            DataSourceError::ServerError { status, message }
        } else {
            DataSourceError::ClientError { status, message }
        }
    }

    /// Maps a failed create onto the taxonomy
    ///
    /// 400/409 only mean a duplicate id when the body says so; the backend
    /// answers `{"detail": "Clínica já existe."}`.
    pub fn from_create_status(status: u16, clinic_id: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let detail = message.to_lowercase();
        let duplicate = detail.contains("já existe") || detail.contains("already exists");

        if matches!(status, 400 | 409) && duplicate {
            DataSourceError::ClinicExists(clinic_id.to_string())
        } else {
            Self::from_status(status, message)
        }
    }
}

/// Clinic creation form errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// One or more required fields are blank
    #[error("Fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

// Conversion from std::io::Error
impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        DashboardError::Configuration(format!("TOML parse error: {err}"))
    }
}
