//! Pure view model of the conversation panel.
//!
//! `PanelView::build` is the whole of the panel's decision making: the
//! components only turn its output into markup. Nothing here is retained
//! between renders.

use std::collections::HashMap;

use shared::models::{ConversationId, ConversationSummary, PanelDiagnostic, Theme};

use crate::config::{MessageCountSlot, PanelConfig};

/// Text shown in place of the list when there are no conversations.
pub const EMPTY_LIST_TEXT: &str = "No conversations yet";

/// Label of the button that asks the owner for a new conversation.
pub const NEW_CONVERSATION_LABEL: &str = "+ New Conversation";

/// Snapshot of everything the panel renders from.
#[derive(Debug, Clone, Copy)]
pub struct PanelInputs<'a> {
    pub conversations: &'a [ConversationSummary],
    pub current_conversation_id: Option<&'a ConversationId>,
    pub theme: Option<Theme>,
    pub config: &'a PanelConfig,
}

/// A conversation that gets a row, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEntry<'a> {
    pub summary: &'a ConversationSummary,
    /// Render key; the id itself, or `{id}#{index}` for a repeated id.
    pub key: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView<'a> {
    pub title: &'a str,
    pub theme_label: Option<&'static str>,
    pub rows: Vec<RowEntry<'a>>,
    pub diagnostics: Vec<PanelDiagnostic>,
}

impl<'a> PanelView<'a> {
    /// Derive the panel from one snapshot of its inputs.
    ///
    /// Every entry gets a row, in the caller's order. When an id repeats,
    /// the first entry owns the id as its key and is the only one that can
    /// be active; each later one is keyed by position and reported as a
    /// diagnostic.
    pub fn build(inputs: PanelInputs<'a>) -> Self {
        let mut first_seen: HashMap<&ConversationId, usize> =
            HashMap::with_capacity(inputs.conversations.len());
        let mut rows = Vec::with_capacity(inputs.conversations.len());
        let mut diagnostics = Vec::new();

        for (index, summary) in inputs.conversations.iter().enumerate() {
            if let Some(&first_index) = first_seen.get(&summary.id) {
                diagnostics.push(PanelDiagnostic::DuplicateId {
                    id: summary.id.clone(),
                    first_index,
                    duplicate_index: index,
                });
                rows.push(RowEntry {
                    summary,
                    key: format!("{}#{index}", summary.id),
                    is_active: false,
                });
                continue;
            }
            first_seen.insert(&summary.id, index);
            rows.push(RowEntry {
                summary,
                key: summary.id.to_string(),
                is_active: inputs.current_conversation_id == Some(&summary.id),
            });
        }

        Self {
            title: inputs.config.panel_title(),
            theme_label: inputs.theme.map(Theme::toggle_label),
            rows,
            diagnostics,
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_active).count()
    }
}

/// What a single row displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub title: String,
    pub count_text: Option<String>,
    pub count_slot: MessageCountSlot,
    pub is_active: bool,
}

impl RowView {
    pub fn build(summary: &ConversationSummary, is_active: bool, config: &PanelConfig) -> Self {
        let count_slot = config.count_slot();
        Self {
            title: config.clip_title(summary.display_title()),
            count_text: (count_slot != MessageCountSlot::Hidden)
                .then(|| message_count_text(summary.message_count)),
            count_slot,
            is_active,
        }
    }
}

pub fn message_count_text(count: u32) -> String {
    if count == 1 {
        "1 message".to_string()
    } else {
        format!("{count} messages")
    }
}
