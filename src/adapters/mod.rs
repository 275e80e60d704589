//! External system integrations for FluxiMed.
//!
//! - [`clinics`] - messaging backend that owns clinic data
//! - [`auth`] - signed-in session gate
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits
//! ([`clinics::ClinicSource`], [`auth::SessionProvider`]) so the views can be
//! exercised with in-memory implementations.
//!
//! ```rust,no_run
//! use fluximed::adapters::clinics::{ClinicDataSource, HttpClinicSource};
//! use fluximed::config::DataSourceConfig;
//! use fluximed::core::notify::ConsoleNotifier;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DataSourceConfig {
//!     base_url: "http://localhost:8000".to_string(),
//!     ..Default::default()
//! };
//! let source = HttpClinicSource::new(&config)?;
//! let clinics = ClinicDataSource::new(Arc::new(source), Arc::new(ConsoleNotifier));
//! let outcome = clinics.load().await;
//! println!("{} clinics", outcome.records().len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod clinics;
