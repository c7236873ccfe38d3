use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use super::ConversationId;

/// The kind of intent a panel control raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IntentKind {
    Select,
    Create,
    Delete,
    ToggleTheme,
}

/// Caller-contract violations detected by the panel.
///
/// None of these stop rendering. They are reported to the owner so it can fix
/// the data or wiring it supplies.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PanelDiagnostic {
    /// Two entries share an identifier. Both are rendered; only the first
    /// occurrence is keyed by the id and can be active.
    #[error(
        "duplicate conversation id `{id}` at position {duplicate_index} (first seen at {first_index})"
    )]
    DuplicateId {
        id: ConversationId,
        first_index: usize,
        duplicate_index: usize,
    },

    /// A control was activated but the owner supplied no callback for it.
    #[error("no `{intent}` callback supplied; interaction ignored")]
    MissingCallback { intent: IntentKind },
}

impl PanelDiagnostic {
    #[must_use]
    pub const fn missing(intent: IntentKind) -> Self {
        Self::MissingCallback { intent }
    }
}
