//! Fetch-or-fallback clinic loading
//!
//! [`ClinicDataSource`] is what the views talk to. Loading never fails: when
//! the backend can't deliver, the fixed demo dataset takes its place and the
//! operator is warned through the injected [`Notifier`]. The outcome says
//! which of the two happened.

use super::client::ClinicSource;
use super::fallback::fallback_clinics;
use crate::core::form::ClinicDraft;
use crate::core::notify::{Notification, Notifier};
use crate::domain::{ClinicRecord, DashboardError, DataSourceError, Result};
use std::sync::Arc;
use std::time::Instant;

/// Result of [`ClinicDataSource::load`]
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Records served by the backend
    Live(Vec<ClinicRecord>),
    /// Demo records substituted after the backend failed
    Fallback {
        records: Vec<ClinicRecord>,
        reason: String,
    },
}

impl LoadOutcome {
    /// The loaded records, whichever way they came
    pub fn records(&self) -> &[ClinicRecord] {
        match self {
            LoadOutcome::Live(records) => records,
            LoadOutcome::Fallback { records, .. } => records,
        }
    }

    /// Consumes the outcome and returns the records
    pub fn into_records(self) -> Vec<ClinicRecord> {
        match self {
            LoadOutcome::Live(records) => records,
            LoadOutcome::Fallback { records, .. } => records,
        }
    }

    /// True when demo data is in use
    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadOutcome::Fallback { .. })
    }

    /// Why the backend data could not be used
    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            LoadOutcome::Live(_) => None,
            LoadOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Clinic collection provider for the dashboard
///
/// # Example
///
/// ```no_run
/// use fluximed::adapters::clinics::{ClinicDataSource, HttpClinicSource};
/// use fluximed::config::DataSourceConfig;
/// use fluximed::core::notify::ConsoleNotifier;
/// use std::sync::Arc;
///
/// # async fn example() -> fluximed::domain::Result<()> {
/// let source = HttpClinicSource::new(&DataSourceConfig::default())?;
/// let data_source = ClinicDataSource::new(Arc::new(source), Arc::new(ConsoleNotifier));
///
/// let outcome = data_source.load().await;
/// if outcome.is_fallback() {
///     println!("demo data");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClinicDataSource {
    source: Arc<dyn ClinicSource>,
    notifier: Arc<dyn Notifier>,
}

impl ClinicDataSource {
    pub fn new(source: Arc<dyn ClinicSource>, notifier: Arc<dyn Notifier>) -> Self {
        Self { source, notifier }
    }

    /// The notification sink shared with the views
    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Loads the clinic collection, falling back to demo data on any failure
    ///
    /// Makes a single request. Never returns an error.
    pub async fn load(&self) -> LoadOutcome {
        let started = Instant::now();

        match self.source.fetch_clinics().await {
            Ok(records) => {
                crate::log_load_complete!(self.source.base_url(), records.len(), started.elapsed());
                LoadOutcome::Live(records)
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Clinic load failed, using demo data");
                let reason = e.to_string();
                self.notifier.notify(Notification::warning(
                    "Showing demo data",
                    format!("Could not reach the clinic backend ({reason})"),
                ));
                LoadOutcome::Fallback {
                    records: fallback_clinics(),
                    reason,
                }
            }
        }
    }

    /// Submits a validated draft to the backend
    ///
    /// The operator is told about success or failure either way.
    ///
    /// # Errors
    ///
    /// Propagates the backend error; nothing is saved in that case.
    pub async fn create(&self, draft: &ClinicDraft) -> Result<ClinicRecord> {
        match self.source.create_clinic(draft).await {
            Ok(record) => {
                tracing::info!(clinic_id = %record.id, "Clinic created");
                self.notifier.notify(Notification::success(
                    "Clinic added",
                    format!("{} was added successfully.", record.name),
                ));
                Ok(record)
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Clinic creation failed");
                let description = match &e {
                    DashboardError::DataSource(DataSourceError::ClinicExists(id)) => {
                        format!("A clinic with id '{id}' already exists.")
                    }
                    other => format!("Try again. ({other})"),
                };
                self.notifier
                    .notify(Notification::error("Failed to add clinic", description));
                Err(e)
            }
        }
    }
}
