//! Clinic creation form
//!
//! Collects the fields for a new clinic and turns them into a
//! [`ClinicDraft`] once every required field is filled. Persisting the draft
//! is the data source's job (see `ClinicDataSource::create`).

use crate::domain::{ClinicId, FormError};

/// Quota used when the form's limit field is empty or unparseable
pub const DEFAULT_MONTHLY_LIMIT: u64 = 1000;

/// Lowest accepted monthly quota
pub const MIN_MONTHLY_LIMIT: u64 = 100;

/// Highest accepted monthly quota
pub const MAX_MONTHLY_LIMIT: u64 = 10_000;

/// Granularity of the monthly quota
pub const MONTHLY_LIMIT_STEP: u64 = 100;

/// Validated request to create a clinic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicDraft {
    pub id: ClinicId,
    pub name: String,
    pub phone_number: String,
    pub prompt: String,
    pub monthly_limit: u64,
    pub active: bool,
}

/// Fields of a form that a clinic can be set through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    Name,
    Phone,
    Prompt,
    MonthlyLimit,
}

impl FormField {
    /// Parses the field name used by the interactive `set` command
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "id" => Some(FormField::Id),
            "name" => Some(FormField::Name),
            "phone" => Some(FormField::Phone),
            "prompt" => Some(FormField::Prompt),
            "limit" | "monthly-limit" | "monthly_limit" => Some(FormField::MonthlyLimit),
            _ => None,
        }
    }
}

/// Raw form state as typed by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicForm {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub prompt: String,
    pub monthly_limit: u64,
}

impl Default for ClinicForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            phone_number: String::new(),
            prompt: String::new(),
            monthly_limit: DEFAULT_MONTHLY_LIMIT,
        }
    }
}

impl ClinicForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates one field from text input
    ///
    /// The monthly limit goes through [`parse_monthly_limit`], so bad input
    /// falls back to the default instead of failing.
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Id => self.id = value.to_string(),
            FormField::Name => self.name = value.to_string(),
            FormField::Phone => self.phone_number = value.to_string(),
            FormField::Prompt => self.prompt = value.to_string(),
            FormField::MonthlyLimit => self.monthly_limit = parse_monthly_limit(value),
        }
    }

    /// Names of required fields that are still blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.trim().is_empty() {
            missing.push("id");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.phone_number.trim().is_empty() {
            missing.push("phone");
        }
        if self.prompt.trim().is_empty() {
            missing.push("prompt");
        }
        missing
    }

    /// Produces the create-intent
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingFields`] when id, name, phone or prompt is
    /// blank.
    pub fn validate(&self) -> Result<ClinicDraft, FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let id = ClinicId::new(self.id.trim())
            .map_err(|_| FormError::MissingFields(vec!["id"]))?;

        Ok(ClinicDraft {
            id,
            name: self.name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            prompt: self.prompt.trim().to_string(),
            monthly_limit: normalize_monthly_limit(self.monthly_limit),
            active: true,
        })
    }
}

/// Parses typed quota input; anything unusable becomes the default
pub fn parse_monthly_limit(input: &str) -> u64 {
    input
        .trim()
        .parse::<u64>()
        .map(normalize_monthly_limit)
        .unwrap_or(DEFAULT_MONTHLY_LIMIT)
}

/// Clamps a quota into `[100, 10000]` on a 100-message grid
///
/// Zero means "not set" and yields the default.
pub fn normalize_monthly_limit(limit: u64) -> u64 {
    if limit == 0 {
        return DEFAULT_MONTHLY_LIMIT;
    }
    let clamped = limit.clamp(MIN_MONTHLY_LIMIT, MAX_MONTHLY_LIMIT);
    let rounded = (clamped + MONTHLY_LIMIT_STEP / 2) / MONTHLY_LIMIT_STEP * MONTHLY_LIMIT_STEP;
    rounded.clamp(MIN_MONTHLY_LIMIT, MAX_MONTHLY_LIMIT)
}
