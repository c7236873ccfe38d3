pub mod class_names;
pub mod conversation_list_panel;
pub mod conversation_row;
pub mod theme_toggle;

#[cfg(all(test, target_arch = "wasm32"))]
mod render_test;

pub use conversation_list_panel::ConversationListPanel;
pub use conversation_row::ConversationRow;
pub use theme_toggle::ThemeToggleControl;
