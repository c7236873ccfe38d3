use shared::models::{ConversationId, ConversationSummary, Theme};
use yewdux::Store;

use crate::interaction::PanelIntent;

/// Authoritative conversation list and selection, owned outside the panel.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct PanelState {
    pub conversations: Vec<ConversationSummary>,
    pub current_conversation_id: Option<ConversationId>,
    pub theme: Option<Theme>,
}

impl PanelState {
    /// Carry out an intent raised by the panel.
    ///
    /// `fresh_id` is only called for [`PanelIntent::Create`].
    pub fn apply(&mut self, intent: PanelIntent, fresh_id: impl FnOnce() -> ConversationId) {
        match intent {
            PanelIntent::Select(id) => {
                if self.conversations.iter().any(|summary| summary.id == id) {
                    self.current_conversation_id = Some(id);
                }
            }
            PanelIntent::Create => {
                let id = fresh_id();
                self.conversations
                    .insert(0, ConversationSummary::new(id.clone(), None, 0));
                self.current_conversation_id = Some(id);
            }
            PanelIntent::Delete(id) => {
                self.conversations.retain(|summary| summary.id != id);
                if self.current_conversation_id.as_ref() == Some(&id) {
                    self.current_conversation_id = None;
                }
            }
            PanelIntent::ToggleTheme => {
                self.theme = Some(self.theme.unwrap_or_default().toggled());
            }
        }
    }
}
