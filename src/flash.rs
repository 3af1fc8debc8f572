//! Keyed flash messages.
//!
//! A flash message is a transient, user-facing notice. Every message carries a
//! key so a renderer can show only the messages belonging to its part of the
//! page, and a flow can clear its own messages without touching others.

use serde::{Deserialize, Serialize};

/// Key used by the backup creation dialog.
pub const BACKUPS_CREATE: &str = "backups:create";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Info,
    Warning,
    Error,
}

impl FlashKind {
    pub fn default_title(self) -> &'static str {
        match self {
            FlashKind::Success => "Success",
            FlashKind::Info => "Info",
            FlashKind::Warning => "Warning",
            FlashKind::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub key: Option<String>,
    pub kind: FlashKind,
    pub title: Option<String>,
    pub message: String,
}

impl FlashMessage {
    pub fn error(key: &str, message: impl Into<String>) -> Self {
        Self { key: Some(key.to_string()), kind: FlashKind::Error, title: None, message: message.into() }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_else(|| self.kind.default_title())
    }
}

/// Operations on the flash store, emitted by flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashCommand {
    Add(FlashMessage),
    /// `None` clears every message.
    Clear(Option<String>),
}

impl FlashCommand {
    pub fn clear(key: &str) -> Self {
        FlashCommand::Clear(Some(key.to_string()))
    }
}

/// Process-wide flash messages in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashStore {
    items: Vec<FlashMessage>,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: FlashMessage) {
        tracing::debug!(key = ?message.key, kind = ?message.kind, "flash added");
        self.items.push(message);
    }

    pub fn add_error(&mut self, key: &str, message: impl Into<String>) {
        self.add(FlashMessage::error(key, message));
    }

    /// Removes the messages under `key`, or all messages when `key` is `None`.
    pub fn clear(&mut self, key: Option<&str>) {
        match key {
            Some(k) => self.items.retain(|m| m.key.as_deref() != Some(k)),
            None => self.items.clear(),
        }
    }

    pub fn apply(&mut self, command: FlashCommand) {
        match command {
            FlashCommand::Add(m) => self.add(m),
            FlashCommand::Clear(key) => self.clear(key.as_deref()),
        }
    }

    pub fn by_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a FlashMessage> + 'a {
        self.items.iter().filter(move |m| m.key.as_deref() == Some(key))
    }

    pub fn all(&self) -> &[FlashMessage] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
