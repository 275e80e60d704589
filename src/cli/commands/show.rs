//! Show command implementation
//!
//! This module implements the `show` command for printing one clinic and,
//! optionally, one of its conversations.

use super::prepare;
use crate::views::render_detail;
use chrono::Local;
use clap::Args;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Clinic identifier (for example clinica-01)
    pub clinic_id: String,

    /// Patient whose conversation should be shown
    #[arg(long)]
    pub chat: Option<String>,
}

impl ShowArgs {
    /// Execute the show command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(clinic_id = %self.clinic_id, chat = ?self.chat, "Showing clinic");

        let ctx = match prepare(config_path) {
            Ok(ctx) => ctx,
            Err(code) => return Ok(code),
        };

        let outcome = ctx.data.load().await;
        let Some(record) = outcome
            .records()
            .iter()
            .find(|r| r.id.as_str() == self.clinic_id)
        else {
            eprintln!("❌ Clinic not found: {}", self.clinic_id);
            return Ok(4); // Not found exit code
        };

        if let Some(patient) = &self.chat {
            if record.chat(patient).is_none() {
                eprintln!("❌ Conversation not found: {patient}");
                return Ok(4);
            }
        }

        if outcome.is_fallback() {
            println!("⚠️  Showing demo data");
            println!();
        }
        print!(
            "{}",
            render_detail(record, self.chat.as_deref(), Local::now())
        );
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_show_missing_config_exit_code() {
        let args = ShowArgs {
            clinic_id: "clinica-01".to_string(),
            chat: None,
        };
        let code = args.execute("/nonexistent/fluximed.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
