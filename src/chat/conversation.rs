//! Role-tagged conversation history.
//!
//! A [`Conversation`] is an explicit, caller-owned record of the exchange so
//! far. Each session (web session, console run, test case) owns its own
//! instance with an independent lifecycle - there is no process-wide shared
//! history. Entries only ever accumulate; the sequence is append-only for
//! the life of the owning session.

use serde::{Deserialize, Serialize};

// ── Entries ───────────────────────────────────────────────────────────────────

/// Message origin tag, serialised with the chat-completions wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryRole {
    System,
    User,
    Assistant,
}

impl EntryRole {
    /// Wire name as used by chat-completion APIs.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryRole::System => "system",
            EntryRole::User => "user",
            EntryRole::Assistant => "assistant",
        }
    }
}

/// One role-tagged message in the conversation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeEntry {
    pub role: EntryRole,
    pub content: String,
}

impl ExchangeEntry {
    pub fn new(role: EntryRole, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

// ── Conversation ──────────────────────────────────────────────────────────────

/// Ordered, append-only exchange history for a single session.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    entries: Vec<ExchangeEntry>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one system entry followed by one user entry.
    ///
    /// Every submitted request goes through here, so a request contributes
    /// exactly two entries before the remote call is made.
    pub fn push_exchange(&mut self, system: impl Into<String>, user: impl Into<String>) {
        self.entries.push(ExchangeEntry::new(EntryRole::System, system));
        self.entries.push(ExchangeEntry::new(EntryRole::User, user));
    }

    /// Append the assistant's reply.
    pub fn record_reply(&mut self, text: impl Into<String>) {
        self.entries.push(ExchangeEntry::new(EntryRole::Assistant, text));
    }

    pub fn entries(&self) -> &[ExchangeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
