//! Creation form rendering

use crate::core::form::{ClinicForm, MAX_MONTHLY_LIMIT, MIN_MONTHLY_LIMIT, MONTHLY_LIMIT_STEP};
use std::fmt;

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        "Not provided"
    } else {
        value
    }
}

/// The creation form with its current values and a live preview
pub struct FormView<'a>(pub &'a ClinicForm);

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.0;

        writeln!(f, "➕ New clinic")?;
        writeln!(f, "   id      = {}", form.id)?;
        writeln!(f, "   name    = {}", form.name)?;
        writeln!(f, "   phone   = {}", form.phone_number)?;
        writeln!(f, "   prompt  = {}", form.prompt)?;
        writeln!(
            f,
            "   limit   = {} ({}-{}, step {})",
            form.monthly_limit, MIN_MONTHLY_LIMIT, MAX_MONTHLY_LIMIT, MONTHLY_LIMIT_STEP
        )?;
        writeln!(f)?;
        write!(f, "{}", FormPreview(form))
    }
}

/// How the new clinic will look once saved
pub struct FormPreview<'a>(pub &'a ClinicForm);

impl fmt::Display for FormPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.0;

        writeln!(f, "👁️  Preview")?;
        writeln!(f, "   ID:            {}", or_placeholder(&form.id))?;
        writeln!(f, "   Name:          {}", or_placeholder(&form.name))?;
        writeln!(f, "   Phone:         {}", or_placeholder(&form.phone_number))?;
        writeln!(f, "   Monthly limit: {} messages", form.monthly_limit)?;
        writeln!(f, "   Prompt:        {}", or_placeholder(&form.prompt))
    }
}

/// Renders the form preview to a string
pub fn render_preview(form: &ClinicForm) -> String {
    FormPreview(form).to_string()
}
