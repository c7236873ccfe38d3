use std::fmt;

use serde::{Deserialize, Serialize};

/// Label shown for conversations that have no usable title yet.
pub const PLACEHOLDER_TITLE: &str = "New Conversation";

/// Opaque identifier of a conversation.
///
/// The panel never interprets the value; it only compares identifiers for
/// equality and uses them as render keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConversationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ConversationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Read-only projection of a conversation used for list display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Unique identifier within the supplied list.
    pub id: ConversationId,

    /// Optional human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Number of messages in the conversation.
    #[serde(default)]
    pub message_count: u32,
}

impl ConversationSummary {
    pub fn new(id: impl Into<ConversationId>, title: Option<&str>, message_count: u32) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_owned),
            message_count,
        }
    }

    /// Returns the title to display, falling back to [`PLACEHOLDER_TITLE`]
    /// when the title is absent or blank.
    #[must_use]
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => PLACEHOLDER_TITLE,
        }
    }
}
