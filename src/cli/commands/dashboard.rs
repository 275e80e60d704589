//! Dashboard command implementation
//!
//! This module implements the `dashboard` command: load the clinics once and
//! print the overview.

use super::prepare;
use crate::views::render_dashboard;
use clap::Args;

/// Arguments for the dashboard command
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Only show clinics whose name or phone contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}

impl DashboardArgs {
    /// Execute the dashboard command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(search = ?self.search, "Rendering dashboard");

        let ctx = match prepare(config_path) {
            Ok(ctx) => ctx,
            Err(code) => return Ok(code),
        };

        let outcome = ctx.data.load().await;
        if outcome.is_fallback() {
            println!("⚠️  Showing demo data");
            println!();
        }

        print!(
            "{}",
            render_dashboard(outcome.records(), self.search.as_deref().unwrap_or(""))
        );
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dashboard_missing_config_exit_code() {
        let args = DashboardArgs { search: None };
        let code = args.execute("/nonexistent/fluximed.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
