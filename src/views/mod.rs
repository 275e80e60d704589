//! Terminal views
//!
//! Every view is a `Display` wrapper over borrowed domain data, so the same
//! rendering serves the one-shot commands, the interactive session and tests:
//!
//! - [`dashboard`] - summary tiles, search, clinic cards
//! - [`detail`] - one clinic with its conversations
//! - [`form`] - clinic creation form and preview
//! - [`session`] - interactive view state and command handling
//!
//! ```
//! use fluximed::adapters::clinics::fallback_clinics;
//! use fluximed::views::dashboard::render_dashboard;
//!
//! let out = render_dashboard(&fallback_clinics(), "vida");
//! assert!(out.contains("Clínica Vida"));
//! assert!(!out.contains("Medical Center"));
//! ```

pub mod dashboard;
pub mod detail;
pub mod format;
pub mod form;
pub mod session;

pub use dashboard::{filter_clinics, render_dashboard, ClinicCard, DashboardView};
pub use detail::{render_detail, DetailView};
pub use form::{render_preview, FormPreview, FormView};
pub use session::{Command, DashboardSession, Flow, ViewState};
