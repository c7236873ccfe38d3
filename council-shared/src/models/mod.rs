pub mod conversation;
pub mod errors;
pub mod theme;

pub use conversation::{ConversationId, ConversationSummary, PLACEHOLDER_TITLE};
pub use errors::{IntentKind, PanelDiagnostic};
pub use theme::Theme;
