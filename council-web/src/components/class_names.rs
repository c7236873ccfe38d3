//! Structural class names emitted by the conversation panel.
//!
//! These are the only hooks an external stylesheet should target. They do
//! not change when the internal markup around them does.

/// Panel container.
pub const CONTAINER: &str = "sidebar";
/// Header region holding the title, theme control and create button.
pub const HEADER: &str = "sidebar-header";
pub const TITLE_ROW: &str = "sidebar-title-row";
pub const THEME_TOGGLE: &str = "theme-toggle";
pub const NEW_CONVERSATION: &str = "new-conversation-btn";
/// Scrollable list body.
pub const LIST: &str = "conversation-list";
/// Placeholder shown instead of rows when the list is empty.
pub const EMPTY: &str = "no-conversations";
/// One conversation row.
pub const ROW: &str = "conversation-item";
/// Added to [`ROW`] for the active conversation.
pub const ROW_ACTIVE: &str = "active";
pub const ROW_TITLE_ROW: &str = "conversation-title-row";
pub const ROW_TITLE: &str = "conversation-title";
pub const ROW_ACTIONS: &str = "conversation-actions";
/// Delete control nested inside a row.
pub const DELETE: &str = "delete-conv-btn";
pub const ROW_META: &str = "conversation-meta";
pub const ROW_COUNT_BADGE: &str = "conversation-count-badge";
