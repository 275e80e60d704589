//! Clinic domain model
//!
//! A clinic is a tenant of the messaging platform. Each clinic owns a set of
//! chat threads, one per patient, holding the exchange between the patient and
//! the clinic's AI assistant. These types are plain data: statistics live in
//! [`crate::core::stats`].

use super::ids::ClinicId;
use serde::{Deserialize, Serialize};

/// Author of a chat message
///
/// The platform only stores two roles. Anything else the backend might send
/// (for example a stray `system` entry) is displayed as the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message sent by the patient
    User,
    /// Reply produced by the AI assistant
    #[serde(other)]
    Assistant,
}

impl Role {
    /// Returns true when the patient wrote the message
    pub fn is_user(&self) -> bool {
        matches!(self, Role::User)
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote the message
    pub role: Role,

    /// Message text
    pub content: String,

    /// ISO-8601 instant, when the platform recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Message {
    /// Creates a patient message without a timestamp
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: None,
        }
    }

    /// Creates an assistant message without a timestamp
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: None,
        }
    }

    /// Sets the timestamp
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

/// Conversation between one patient and the assistant
///
/// Messages are append-only on the platform side; the dashboard only reads
/// them. An empty thread is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatThread {
    /// Patient identifier (the key of the chat map)
    pub patient: String,

    /// Messages in the order they were exchanged
    pub messages: Vec<Message>,

    /// Last inbound text as recorded by the webhook
    pub last_message: Option<String>,

    /// Raw platform timestamp of the last inbound message
    pub updated_at: Option<String>,
}

impl ChatThread {
    /// Creates a thread for `patient` with the given messages
    pub fn new(patient: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            patient: patient.into(),
            messages,
            last_message: None,
            updated_at: None,
        }
    }

    /// Returns true when the thread holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// A clinic and its chats
///
/// # Examples
///
/// ```
/// use fluximed::domain::clinic::{ChatThread, ClinicRecord, Message};
///
/// let clinic = ClinicRecord::builder()
///     .id("clinica-01")
///     .unwrap()
///     .name("Clínica São João")
///     .phone_number("(11) 99999-9999")
///     .messages_used(450)
///     .monthly_limit(1000)
///     .chat(ChatThread::new("Maria Silva", vec![Message::user("Olá")]))
///     .build()
///     .unwrap();
///
/// assert_eq!(clinic.chats.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicRecord {
    /// Unique clinic identifier
    pub id: ClinicId,

    /// Display name
    pub name: String,

    /// WhatsApp number the clinic answers on
    pub phone_number: String,

    /// Messages consumed in the current billing period
    pub messages_used: u64,

    /// Monthly message quota
    pub monthly_limit: u64,

    /// Chat threads in source order, unique by patient
    pub chats: Vec<ChatThread>,

    /// System prompt configured for the clinic's assistant
    pub prompt: Option<String>,

    /// Whether the backend currently answers for this clinic
    pub active: bool,
}

impl ClinicRecord {
    /// Creates a new builder for constructing a ClinicRecord
    pub fn builder() -> ClinicRecordBuilder {
        ClinicRecordBuilder::default()
    }

    /// Looks up a chat by patient identifier
    pub fn chat(&self, patient: &str) -> Option<&ChatThread> {
        self.chats.iter().find(|chat| chat.patient == patient)
    }
}

/// Builder for constructing ClinicRecord instances
#[derive(Debug, Default)]
pub struct ClinicRecordBuilder {
    id: Option<ClinicId>,
    name: Option<String>,
    phone_number: Option<String>,
    messages_used: u64,
    monthly_limit: Option<u64>,
    chats: Vec<ChatThread>,
    prompt: Option<String>,
    active: Option<bool>,
}

impl ClinicRecordBuilder {
    /// Creates a new ClinicRecordBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the clinic ID
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is empty
    pub fn id(mut self, id: impl Into<String>) -> Result<Self, String> {
        self.id = Some(ClinicId::new(id)?);
        Ok(self)
    }

    /// Sets an already validated clinic ID
    pub fn clinic_id(mut self, id: ClinicId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the phone number
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Sets the consumed message count (defaults to 0)
    pub fn messages_used(mut self, messages_used: u64) -> Self {
        self.messages_used = messages_used;
        self
    }

    /// Sets the monthly quota
    pub fn monthly_limit(mut self, monthly_limit: u64) -> Self {
        self.monthly_limit = Some(monthly_limit);
        self
    }

    /// Appends a chat thread, replacing an existing thread for the same patient
    pub fn chat(mut self, chat: ChatThread) -> Self {
        match self.chats.iter_mut().find(|c| c.patient == chat.patient) {
            Some(existing) => *existing = chat,
            None => self.chats.push(chat),
        }
        self
    }

    /// Sets the assistant prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Sets the active flag (defaults to true)
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Builds the ClinicRecord
    ///
    /// # Errors
    ///
    /// Returns an error if any required field is missing
    pub fn build(self) -> Result<ClinicRecord, String> {
        Ok(ClinicRecord {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            phone_number: self.phone_number.ok_or("phone_number is required")?,
            messages_used: self.messages_used,
            monthly_limit: self.monthly_limit.ok_or("monthly_limit is required")?,
            chats: self.chats,
            prompt: self.prompt,
            active: self.active.unwrap_or(true),
        })
    }
}
