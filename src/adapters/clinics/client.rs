//! Transport for the clinic backend
//!
//! [`ClinicSource`] is the seam between the dashboard and whatever serves the
//! clinic snapshot. [`HttpClinicSource`] talks to the messaging backend over
//! HTTP; tests plug in their own implementations.

use super::models::{ClinicsResponse, CreateClinicRequest, ErrorResponse};
use crate::config::DataSourceConfig;
use crate::core::form::ClinicDraft;
use crate::domain::{ClinicRecord, DashboardError, DataSourceError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

/// Backend that can list and create clinics
///
/// Implementations make exactly one attempt per call; retrying or falling
/// back is left to the caller.
#[async_trait]
pub trait ClinicSource: Send + Sync {
    /// Fetches the full clinic collection
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable, answers with a
    /// non-success status, or sends a payload that doesn't decode.
    async fn fetch_clinics(&self) -> Result<Vec<ClinicRecord>>;

    /// Persists a new clinic and returns its record
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::ClinicExists`] when the id is taken, or a
    /// transport error.
    async fn create_clinic(&self, draft: &ClinicDraft) -> Result<ClinicRecord>;

    /// Human-readable location of the backend, for logs
    fn base_url(&self) -> &str;
}

/// HTTP implementation of [`ClinicSource`]
///
/// # Example
///
/// ```no_run
/// use fluximed::adapters::clinics::{ClinicSource, HttpClinicSource};
/// use fluximed::config::DataSourceConfig;
///
/// # async fn example() -> fluximed::domain::Result<()> {
/// let source = HttpClinicSource::new(&DataSourceConfig::default())?;
/// let clinics = source.fetch_clinics().await?;
/// println!("{} clinics", clinics.len());
/// # Ok(())
/// # }
/// ```
pub struct HttpClinicSource {
    base_url: String,
    clinics_url: Url,
    client: Client,
}

impl HttpClinicSource {
    /// Creates a source from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &DataSourceConfig) -> Result<Self> {
        let clinics_url = config.clinics_url().map_err(DashboardError::Configuration)?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                DashboardError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.clone(),
            clinics_url,
            client,
        })
    }

    /// URL of the clinic collection
    pub fn clinics_url(&self) -> &Url {
        &self.clinics_url
    }
}

fn transport_error(err: reqwest::Error) -> DataSourceError {
    if err.is_timeout() {
        DataSourceError::Timeout(err.to_string())
    } else {
        DataSourceError::ConnectionFailed(err.to_string())
    }
}

#[async_trait]
impl ClinicSource for HttpClinicSource {
    async fn fetch_clinics(&self) -> Result<Vec<ClinicRecord>> {
        tracing::debug!(url = %self.clinics_url, "Fetching clinics");

        let resp = self
            .client
            .get(self.clinics_url.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(DataSourceError::from_status(status.as_u16(), body).into());
        }

        // Decoded from text so that object key order survives
        let response: ClinicsResponse = serde_json::from_str(&body)
            .map_err(|e| DataSourceError::InvalidResponse(e.to_string()))?;
        let records = response.into_records()?;

        tracing::debug!(count = records.len(), "Decoded clinic snapshot");
        Ok(records)
    }

    async fn create_clinic(&self, draft: &ClinicDraft) -> Result<ClinicRecord> {
        let request = CreateClinicRequest::from(draft);

        tracing::info!(clinic_id = %draft.id, url = %self.clinics_url, "Creating clinic");

        let resp = self
            .client
            .post(self.clinics_url.clone())
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.message())
                .unwrap_or(body);

            let err = DataSourceError::from_create_status(status.as_u16(), draft.id.as_str(), message);
            if matches!(err, DataSourceError::ClinicExists(_)) {
                tracing::warn!(clinic_id = %draft.id, "Clinic id already taken");
            }
            return Err(err.into());
        }

        // The backend acknowledges with a status message, not the record
        ClinicRecord::builder()
            .clinic_id(draft.id.clone())
            .name(draft.name.clone())
            .phone_number(draft.phone_number.clone())
            .prompt(draft.prompt.clone())
            .monthly_limit(draft.monthly_limit)
            .active(draft.active)
            .build()
            .map_err(DashboardError::Other)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_clinics_url() {
        let config = DataSourceConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..Default::default()
        };
        let source = HttpClinicSource::new(&config).unwrap();
        assert_eq!(source.clinics_url().as_str(), "http://localhost:9000/clinicas");
        assert_eq!(source.base_url(), "http://localhost:9000/");
    }

    #[test]
    fn test_new_rejects_garbage_url() {
        let config = DataSourceConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            HttpClinicSource::new(&config),
            Err(DashboardError::Configuration(_))
        ));
    }
}
