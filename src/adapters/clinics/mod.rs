//! Clinic backend adapter
//!
//! This module provides the integration with the messaging backend that owns
//! clinic data: the transport trait and its HTTP implementation, the wire
//! models, the demo dataset, and the fetch-or-fallback loader the views use.

pub mod client;
pub mod fallback;
pub mod models;
pub mod source;

pub use client::{ClinicSource, HttpClinicSource};
pub use fallback::fallback_clinics;
pub use models::{ClinicAttributes, ClinicsResponse, CreateClinicRequest};
pub use source::{ClinicDataSource, LoadOutcome};
