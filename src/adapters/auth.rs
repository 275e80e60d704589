//! Session gate for the dashboard
//!
//! Authentication itself belongs to an external provider. The dashboard only
//! asks whether someone is signed in and refuses to show clinic data
//! otherwise. [`ConfigSessionProvider`] reads the session from the `[auth]`
//! configuration section.

use crate::config::{AuthConfig, SecretString};
use crate::domain::{DashboardError, Result};
use secrecy::ExposeSecret;
use std::sync::Mutex;

/// A signed-in operator
#[derive(Debug, Clone)]
pub struct Session {
    /// Display name of the operator
    pub user: String,
    token: SecretString,
}

impl Session {
    pub fn new(user: impl Into<String>, token: SecretString) -> Self {
        Self {
            user: user.into(),
            token,
        }
    }

    /// Session token, for forwarding to the auth provider
    pub fn token(&self) -> &SecretString {
        &self.token
    }
}

/// Source of the current session
pub trait SessionProvider: Send + Sync {
    /// The active session, or `None` when signed out
    fn current_session(&self) -> Option<Session>;

    /// Ends the active session
    fn sign_out(&self);

    /// Where signed-out operators are sent
    fn login_route(&self) -> &str;
}

/// Session backed by the `[auth]` configuration section
///
/// Signed in when both `user` and a non-blank `token` are configured.
/// Signing out only affects this process.
pub struct ConfigSessionProvider {
    session: Mutex<Option<Session>>,
    login_route: String,
}

impl ConfigSessionProvider {
    pub fn new(config: &AuthConfig) -> Self {
        let session = match (&config.user, &config.token) {
            (Some(user), Some(token))
                if !user.trim().is_empty() && !token.expose_secret().is_blank() =>
            {
                Some(Session::new(user.trim(), token.clone()))
            }
            _ => None,
        };

        Self {
            session: Mutex::new(session),
            login_route: config.login_route.clone(),
        }
    }
}

impl SessionProvider for ConfigSessionProvider {
    fn current_session(&self) -> Option<Session> {
        self.session.lock().ok().and_then(|guard| guard.clone())
    }

    fn sign_out(&self) {
        if let Ok(mut guard) = self.session.lock() {
            if let Some(session) = guard.take() {
                tracing::info!(user = %session.user, "Signed out");
            }
        }
    }

    fn login_route(&self) -> &str {
        &self.login_route
    }
}

/// Returns the active session or an [`DashboardError::Unauthenticated`] error
/// pointing at the login route
pub fn require_session(provider: &dyn SessionProvider) -> Result<Session> {
    provider
        .current_session()
        .ok_or_else(|| DashboardError::Unauthenticated {
            login_route: provider.login_route().to_string(),
        })
}
