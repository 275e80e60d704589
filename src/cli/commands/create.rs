//! Create command implementation
//!
//! This module implements the `create` command, the non-interactive form of
//! the clinic creation form.

use super::{exit_code, prepare};
use crate::core::form::{ClinicForm, FormField};
use crate::core::notify::Notification;
use crate::views::{render_preview, ClinicCard};
use clap::Args;

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Unique clinic identifier (for example clinica-04)
    #[arg(long, default_value = "")]
    pub id: String,

    /// Display name
    #[arg(long, default_value = "")]
    pub name: String,

    /// WhatsApp number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// System prompt for the clinic's assistant
    #[arg(long, default_value = "")]
    pub prompt: String,

    /// Monthly message quota (100-10000, steps of 100)
    #[arg(long, default_value = "1000")]
    pub monthly_limit: String,
}

impl CreateArgs {
    /// Fills a form the same way the interactive `set` command does
    fn to_form(&self) -> ClinicForm {
        let mut form = ClinicForm::new();
        form.set(FormField::Id, &self.id);
        form.set(FormField::Name, &self.name);
        form.set(FormField::Phone, &self.phone);
        form.set(FormField::Prompt, &self.prompt);
        form.set(FormField::MonthlyLimit, &self.monthly_limit);
        form
    }

    /// Execute the create command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(clinic_id = %self.id, "Creating clinic");

        let ctx = match prepare(config_path) {
            Ok(ctx) => ctx,
            Err(code) => return Ok(code),
        };

        let form = self.to_form();
        print!("{}", render_preview(&form));
        println!();

        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                ctx.data
                    .notifier()
                    .notify(Notification::error("Missing fields", e.to_string()));
                return Ok(1); // Validation error exit code
            }
        };

        match ctx.data.create(&draft).await {
            Ok(record) => {
                print!("{}", ClinicCard(&record));
                Ok(0)
            }
            Err(e) => Ok(exit_code(&e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CreateArgs {
        CreateArgs {
            id: " clinica-04 ".to_string(),
            name: "Clínica Norte".to_string(),
            phone: "(11) 66666-6666".to_string(),
            prompt: "Seja empático.".to_string(),
            monthly_limit: "abc".to_string(),
        }
    }

    #[test]
    fn test_to_form_applies_limit_rules() {
        let form = args().to_form();
        assert_eq!(form.monthly_limit, 1000);

        let draft = form.validate().unwrap();
        assert_eq!(draft.id.as_str(), "clinica-04");
    }

    #[test]
    fn test_to_form_reports_missing() {
        let mut a = args();
        a.prompt = "   ".to_string();
        a.name = String::new();
        assert_eq!(a.to_form().missing_fields(), vec!["name", "prompt"]);
    }
}
