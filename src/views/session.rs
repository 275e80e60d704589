//! Interactive dashboard session
//!
//! Holds the loaded collection and the view state, and applies operator
//! commands to them. The CLI loop reads a line, parses a [`Command`], calls
//! [`DashboardSession::handle`] and prints whatever the returned [`Flow`]
//! asks for. Feedback such as "clinic not found" goes through the notifier.

use super::dashboard::DashboardView;
use super::detail::DetailView;
use super::form::FormView;
use crate::adapters::auth::{require_session, SessionProvider};
use crate::adapters::clinics::ClinicDataSource;
use crate::core::form::{ClinicForm, FormField};
use crate::core::notify::{Notification, Notifier};
use crate::domain::{ClinicId, ClinicRecord, Result};
use chrono::{DateTime, TimeZone};
use std::fmt;
use std::sync::Arc;

/// Command reference printed by `help`
pub const HELP: &str = "\
Commands:
  search <term>         filter clinics by name or phone
  clear                 clear the search
  open <clinic-id>      show a clinic
  chat <patient>        show a conversation of the open clinic
  back                  return to the dashboard
  new                   start the creation form
  set <field> <value>   fill a form field (id, name, phone, prompt, limit)
  submit                create the clinic
  cancel                discard the form
  refresh               reload clinics from the backend
  logout                sign out
  help                  show this help
  quit                  leave
";

/// What the operator is looking at
///
/// The fields are independent: closing the form keeps the selected clinic,
/// and the search survives opening a clinic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub selected_clinic: Option<ClinicId>,
    pub selected_chat: Option<String>,
    pub creation_form: Option<ClinicForm>,
    pub search_term: String,
}

/// A parsed line of operator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line, just redraw
    Redraw,
    Search(String),
    Clear,
    Open(String),
    Chat(String),
    Back,
    New,
    Set(FormField, String),
    Submit,
    Cancel,
    Refresh,
    Logout,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line
    ///
    /// # Errors
    ///
    /// Returns a message for unknown commands or missing arguments.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(v, r)| (v, r.trim()))
            .unwrap_or((line, ""));

        let required = |what: &str| -> std::result::Result<String, String> {
            if rest.is_empty() {
                Err(format!("Usage: {verb} <{what}>"))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb.to_lowercase().as_str() {
            "" => Ok(Command::Redraw),
            "search" => Ok(Command::Search(rest.to_string())),
            "clear" => Ok(Command::Clear),
            "open" => required("clinic-id").map(Command::Open),
            "chat" => required("patient").map(Command::Chat),
            "back" => Ok(Command::Back),
            "new" => Ok(Command::New),
            "set" => {
                let (name, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(n, v)| (n, v.trim()))
                    .unwrap_or((rest, ""));
                if name.is_empty() {
                    return Err("Usage: set <field> <value>".to_string());
                }
                FormField::parse(name)
                    .map(|field| Command::Set(field, value.to_string()))
                    .ok_or_else(|| format!("Unknown field '{name}'"))
            }
            "submit" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "refresh" => Ok(Command::Refresh),
            "logout" => Ok(Command::Logout),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{other}', type 'help'")),
        }
    }
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Redraw the current screen
    Render,
    /// Print [`HELP`]
    Help,
    /// Leave the loop
    Quit,
    /// The operator signed out; send them to the login route
    SignedOut { login_route: String },
}

/// Loaded clinics plus view state
pub struct DashboardSession {
    data: ClinicDataSource,
    sessions: Arc<dyn SessionProvider>,
    records: Vec<ClinicRecord>,
    demo_data: bool,
    state: ViewState,
}

impl DashboardSession {
    /// Checks the session and performs the initial load
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::DashboardError::Unauthenticated`] when nobody
    /// is signed in. Load failures do not error; they switch to demo data.
    pub async fn start(data: ClinicDataSource, sessions: Arc<dyn SessionProvider>) -> Result<Self> {
        let session = require_session(sessions.as_ref())?;
        tracing::info!(user = %session.user, "Dashboard session started");

        let outcome = data.load().await;
        let demo_data = outcome.is_fallback();

        Ok(Self {
            data,
            sessions,
            records: outcome.into_records(),
            demo_data,
            state: ViewState::default(),
        })
    }

    pub fn records(&self) -> &[ClinicRecord] {
        &self.records
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// True while the fallback dataset is on screen
    pub fn is_demo_data(&self) -> bool {
        self.demo_data
    }

    fn notifier(&self) -> &Arc<dyn Notifier> {
        self.data.notifier()
    }

    fn selected_record(&self) -> Option<&ClinicRecord> {
        let id = self.state.selected_clinic.as_ref()?;
        self.records.iter().find(|r| &r.id == id)
    }

    /// Applies one command to the state
    pub async fn handle(&mut self, command: Command) -> Flow {
        tracing::debug!(?command, "Handling command");

        match command {
            Command::Redraw => {}
            Command::Search(term) => self.state.search_term = term,
            Command::Clear => self.state.search_term.clear(),
            Command::Open(id) => self.open(&id),
            Command::Chat(patient) => self.select_chat(patient),
            Command::Back => {
                self.state.selected_clinic = None;
                self.state.selected_chat = None;
            }
            Command::New => {
                if self.state.creation_form.is_none() {
                    self.state.creation_form = Some(ClinicForm::new());
                }
            }
            Command::Set(field, value) => match self.state.creation_form.as_mut() {
                Some(form) => form.set(field, &value),
                None => self.data.notifier().notify(Notification::error(
                    "No form open",
                    "Type 'new' to start adding a clinic.",
                )),
            },
            Command::Submit => self.submit().await,
            Command::Cancel => self.state.creation_form = None,
            Command::Refresh => self.refresh().await,
            Command::Logout => {
                self.sessions.sign_out();
                return Flow::SignedOut {
                    login_route: self.sessions.login_route().to_string(),
                };
            }
            Command::Help => return Flow::Help,
            Command::Quit => return Flow::Quit,
        }
        Flow::Render
    }

    fn open(&mut self, id: &str) {
        if let Some(record) = self.records.iter().find(|r| r.id.as_str() == id) {
            self.state.selected_clinic = Some(record.id.clone());
            self.state.selected_chat = None;
        } else {
            self.notifier().notify(Notification::error(
                "Clinic not found",
                format!("No clinic with id '{id}'."),
            ));
        }
    }

    fn select_chat(&mut self, patient: String) {
        let known = match self.selected_record() {
            Some(record) => record.chat(&patient).is_some(),
            None => {
                self.notifier().notify(Notification::error(
                    "No clinic open",
                    "Type 'open <clinic-id>' first.",
                ));
                return;
            }
        };

        if known {
            self.state.selected_chat = Some(patient);
        } else {
            self.notifier().notify(Notification::error(
                "Conversation not found",
                format!("No conversation with '{patient}'."),
            ));
        }
    }

    async fn submit(&mut self) {
        let Some(form) = self.state.creation_form.as_ref() else {
            self.notifier().notify(Notification::error(
                "No form open",
                "Type 'new' to start adding a clinic.",
            ));
            return;
        };

        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                self.notifier()
                    .notify(Notification::error("Missing fields", e.to_string()));
                return;
            }
        };

        // On failure the form stays open with its values
        if let Ok(record) = self.data.create(&draft).await {
            self.records.push(record);
            self.state.creation_form = None;
        }
    }

    async fn refresh(&mut self) {
        let outcome = self.data.load().await;
        self.demo_data = outcome.is_fallback();
        self.records = outcome.into_records();

        // A failed load has already warned
        if !self.demo_data {
            self.notifier().notify(Notification::success(
                "Updated",
                "Clinic data refreshed successfully.",
            ));
        }

        if self.selected_record().is_none() {
            self.state.selected_clinic = None;
            self.state.selected_chat = None;
        }
    }

    /// Renders the current screen
    ///
    /// The form takes precedence over an open clinic, which takes precedence
    /// over the dashboard.
    pub fn render<Tz>(&self, now: DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::new();
        if self.demo_data {
            out.push_str("⚠️  Showing demo data\n\n");
        }

        if let Some(form) = &self.state.creation_form {
            out.push_str(&FormView(form).to_string());
        } else if let Some(record) = self.selected_record() {
            let chat = self.state.selected_chat.as_deref();
            out.push_str(&DetailView::new(record, chat, now).to_string());
        } else {
            out.push_str(&DashboardView::new(&self.records, &self.state.search_term).to_string());
        }
        out
    }
}
