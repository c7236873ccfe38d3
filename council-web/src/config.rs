//! Panel configuration
//!
//! Presentation settings for the conversation panel. Defaults can be
//! overridden at build time through environment variables.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Default heading shown at the top of the panel.
pub const DEFAULT_PANEL_TITLE: &str = "LLM Council";

/// Where a row shows its message count.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MessageCountSlot {
    /// A meta line under the title.
    #[default]
    Meta,
    /// A compact badge beside the title.
    Badge,
    /// Not shown.
    Hidden,
}

/// Presentation settings for [`crate::components::ConversationListPanel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Heading of the panel
    pub panel_title: String,
    /// Message count placement
    pub count_slot: MessageCountSlot,
    /// Clip display titles longer than this many characters
    pub title_max_chars: Option<usize>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panel_title: option_env!("COUNCIL_PANEL_TITLE")
                .filter(|title| !title.trim().is_empty())
                .unwrap_or(DEFAULT_PANEL_TITLE)
                .to_string(),
            count_slot: option_env!("COUNCIL_MESSAGE_COUNT_SLOT")
                .and_then(|slot| MessageCountSlot::from_str(slot.trim()).ok())
                .unwrap_or_default(),
            title_max_chars: option_env!("COUNCIL_TITLE_MAX_CHARS")
                .and_then(|limit| limit.trim().parse().ok()),
        }
    }
}

impl PanelConfig {
    /// Create a new configuration from the build-time defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel_title(&self) -> &str {
        &self.panel_title
    }

    pub const fn count_slot(&self) -> MessageCountSlot {
        self.count_slot
    }

    /// Apply `title_max_chars` to a display title.
    ///
    /// Titles over the limit keep `limit - 3` characters followed by `...`.
    pub fn clip_title(&self, title: &str) -> String {
        match self.title_max_chars {
            Some(limit) if title.chars().count() > limit => {
                let kept: String = title.chars().take(limit.saturating_sub(3)).collect();
                format!("{kept}...")
            }
            _ => title.to_string(),
        }
    }
}
