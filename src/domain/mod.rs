//! Domain models and types for FluxiMed.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ClinicId`])
//! - **Domain models** ([`ClinicRecord`], [`ChatThread`], [`Message`])
//! - **Error types** ([`DashboardError`], [`DataSourceError`], [`FormError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, DashboardError>`]:
//!
//! ```rust
//! use fluximed::domain::{DashboardError, Result};
//!
//! fn example() -> Result<()> {
//!     let _config = fluximed::config::load_config("fluximed.toml")?;
//!     Ok(())
//! }
//! ```

pub mod clinic;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use clinic::{ChatThread, ClinicRecord, ClinicRecordBuilder, Message, Role};
pub use errors::{DashboardError, DataSourceError, FormError};
pub use ids::ClinicId;
pub use result::Result;
