//! Interactive command implementation
//!
//! This module implements the `interactive` command: a line-oriented session
//! over the dashboard, detail and form views. Ctrl+C or SIGTERM ends it.

use super::{exit_code, prepare};
use crate::views::session::{Command, DashboardSession, Flow, HELP};
use chrono::Local;
use clap::Args;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

/// Arguments for the interactive command
#[derive(Args, Debug)]
pub struct InteractiveArgs {}

impl InteractiveArgs {
    /// Execute the interactive command
    pub async fn execute(
        &self,
        config_path: &str,
        mut shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let ctx = match prepare(config_path) {
            Ok(ctx) => ctx,
            Err(code) => return Ok(code),
        };

        let mut session = match DashboardSession::start(ctx.data, ctx.sessions).await {
            Ok(s) => s,
            Err(e) => {
                println!("❌ {e}");
                return Ok(exit_code(&e));
            }
        };

        print!("{}", session.render(Local::now()));
        println!();
        println!("Type 'help' for commands.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            if *shutdown_signal.borrow() {
                break;
            }

            print!("fluximed> ");
            std::io::stdout().flush()?;

            let line = tokio::select! {
                _ = shutdown_signal.changed() => {
                    println!();
                    tracing::info!("Interactive session interrupted");
                    break;
                }
                line = lines.next_line() => line?,
            };

            // End of input
            let Some(line) = line else {
                println!();
                break;
            };

            let command = match Command::parse(&line) {
                Ok(c) => c,
                Err(msg) => {
                    println!("❌ {msg}");
                    continue;
                }
            };

            match session.handle(command).await {
                Flow::Render => {
                    println!();
                    print!("{}", session.render(Local::now()));
                }
                Flow::Help => print!("{HELP}"),
                Flow::Quit => break,
                Flow::SignedOut { login_route } => {
                    println!("👋 Signed out");
                    println!("   Sign in at {login_route}");
                    return Ok(3); // Not signed in exit code
                }
            }
        }

        Ok(0)
    }
}
