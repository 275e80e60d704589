//! Non-blocking user notifications
//!
//! Components never print toasts themselves; they receive a [`Notifier`] and
//! push [`Notification`]s into it. The CLI wires a [`ConsoleNotifier`], tests
//! use a [`MemoryNotifier`] and inspect what was sent.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "ℹ️ ",
            NotificationLevel::Success => "✅",
            NotificationLevel::Warning => "⚠️ ",
            NotificationLevel::Error => "❌",
        }
    }
}

/// A toast-style message: short title plus a description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    /// Creates a notification
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, description)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.level.icon(), self.title, self.description)
    }
}

/// Sink for notifications
pub trait Notifier: Send + Sync {
    /// Delivers a notification; must not block or fail
    fn notify(&self, notification: Notification);
}

/// Writes notifications to stderr and the log
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Warning => tracing::warn!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
            NotificationLevel::Error => tracing::error!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
            _ => tracing::debug!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
        }
        eprintln!("{notification}");
    }
}

/// Keeps every notification in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far
    pub fn notifications(&self) -> Vec<Notification> {
        match self.received.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of notifications at `level`
    pub fn count(&self, level: NotificationLevel) -> usize {
        self.notifications()
            .iter()
            .filter(|n| n.level == level)
            .count()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        match self.received.lock() {
            Ok(mut guard) => guard.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}
