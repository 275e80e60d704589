//! Core dashboard logic for FluxiMed.
//!
//! # Modules
//!
//! - [`stats`] - Usage statistics derived from clinic records
//! - [`form`] - Clinic creation form and its create-intent
//! - [`notify`] - Injected notification sink (toasts)
//!
//! # Example
//!
//! ```rust
//! use fluximed::adapters::clinics::fallback_clinics;
//! use fluximed::core::stats::FleetSummary;
//!
//! let clinics = fallback_clinics();
//! let summary = FleetSummary::of(&clinics);
//!
//! assert_eq!(summary.total_clinics, 3);
//! assert_eq!(summary.total_chats, 3);
//! assert_eq!(summary.total_messages, 10);
//! ```

pub mod form;
pub mod notify;
pub mod stats;
