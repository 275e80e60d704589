// FluxiMed - Clinic Dashboard
// Copyright (c) 2025 FluxiMed Contributors
// Licensed under the MIT License

//! # FluxiMed - Clinic Dashboard
//!
//! FluxiMed is an administrative dashboard for a multi-tenant AI messaging
//! platform: each clinic runs a WhatsApp assistant that talks to patients.
//! Operators use the dashboard to see every clinic, drill into one clinic's
//! conversations, and register new clinics.
//!
//! ## Overview
//!
//! This library provides:
//! - **Loading** the clinic collection from the messaging backend, with a
//!   fixed demo dataset when the backend can't be reached
//! - **Deriving** usage statistics per clinic and across the fleet
//! - **Rendering** the dashboard, clinic detail and creation form as text
//! - **Creating** clinics through a validated form
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`views`] - Text rendering and the interactive session
//! - [`core`] - Statistics, form rules and notifications
//! - [`adapters`] - Clinic backend and session integrations
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fluximed::adapters::clinics::{ClinicDataSource, HttpClinicSource};
//! use fluximed::config::load_config;
//! use fluximed::core::notify::ConsoleNotifier;
//! use fluximed::views::render_dashboard;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("fluximed.toml")?;
//!     let source = HttpClinicSource::new(&config.data_source)?;
//!     let clinics = ClinicDataSource::new(Arc::new(source), Arc::new(ConsoleNotifier));
//!
//!     let outcome = clinics.load().await;
//!     print!("{}", render_dashboard(outcome.records(), ""));
//!     Ok(())
//! }
//! ```
//!
//! ## Statistics
//!
//! Usage is undefined for a clinic without a quota, and the fleet average
//! skips such clinics:
//!
//! ```rust
//! use fluximed::adapters::clinics::fallback_clinics;
//! use fluximed::core::stats::{fleet_average_usage, usage_ratio};
//!
//! let clinics = fallback_clinics();
//! assert_eq!(usage_ratio(&clinics[0]), Some(0.45));
//! assert_eq!(fleet_average_usage(&[]), None);
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod views;
