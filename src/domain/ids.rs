//! Domain identifier types with validation
//!
//! Newtype wrapper for clinic identifiers so they can't be mixed up with
//! patient keys or display names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clinic identifier newtype wrapper
///
/// Opaque, unique and immutable once a clinic exists. The backend uses
/// slugs such as `clinica-01`.
///
/// # Examples
///
/// ```
/// use fluximed::domain::ids::ClinicId;
/// use std::str::FromStr;
///
/// let id = ClinicId::from_str("clinica-01").unwrap();
/// assert_eq!(id.as_str(), "clinica-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClinicId(String);

impl ClinicId {
    /// Creates a new ClinicId from a string
    ///
    /// Returns `Err` when the identifier is empty or only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Clinic ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Wraps a literal known to be non-empty (built-in datasets)
    pub(crate) fn from_trusted(id: &str) -> Self {
        debug_assert!(!id.trim().is_empty());
        Self(id.to_string())
    }

    /// Returns the clinic ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ClinicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClinicId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ClinicId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClinicId> for String {
    fn from(id: ClinicId) -> Self {
        id.0
    }
}

impl AsRef<str> for ClinicId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
