use shared::models::{ConversationId, Theme};
use uuid::Uuid;
use web_sys::window;
use yew::{Html, function_component, html, use_effect_with};
use yewdux::prelude::use_store;

use crate::components::ConversationListPanel;
use crate::config::PanelConfig;
use crate::interaction::PanelIntent;
use crate::models::app_state::PanelState;

fn new_conversation_id() -> ConversationId {
    ConversationId::new(Uuid::new_v4().to_string())
}

/// Theme already on `<html data-theme>`, else the system preference.
fn initial_theme() -> Theme {
    let Some(window) = window() else {
        return Theme::default();
    };

    let system_prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|media_query| media_query.matches());

    window
        .document()
        .and_then(|document| document.document_element())
        .and_then(|html_element| html_element.get_attribute("data-theme"))
        .and_then(|value| value.parse::<Theme>().ok())
        .unwrap_or_else(|| Theme::from_preference(system_prefers_dark))
}

fn apply_document_theme(theme: Theme) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(html_element) = document.document_element()
        && let Err(err) = html_element.set_attribute("data-theme", &theme.to_string())
    {
        web_sys::console::error_2(&"Failed to apply theme:".into(), &err);
    }
}

/// Owner of the conversation list; keeps it in memory only.
#[function_component(App)]
pub fn app() -> Html {
    let (state, dispatch) = use_store::<PanelState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            let theme = initial_theme();
            dispatch.reduce_mut(move |state| state.theme = Some(theme));
            || {}
        });
    }

    use_effect_with(state.theme, |theme| {
        if let Some(theme) = *theme {
            apply_document_theme(theme);
        }
        || {}
    });

    let on_select = dispatch.reduce_mut_callback_with(|state, id: ConversationId| {
        state.apply(PanelIntent::Select(id), new_conversation_id);
    });
    let on_create = dispatch.reduce_mut_callback(|state| {
        state.apply(PanelIntent::Create, new_conversation_id);
    });
    let on_delete = dispatch.reduce_mut_callback_with(|state, id: ConversationId| {
        state.apply(PanelIntent::Delete(id), new_conversation_id);
    });
    let on_toggle_theme = dispatch.reduce_mut_callback(|state| {
        state.apply(PanelIntent::ToggleTheme, new_conversation_id);
    });

    html! {
        <div class="flex h-screen">
            <aside class="w-72 border-r border-base-300">
                <ConversationListPanel
                    conversations={state.conversations.clone()}
                    current_conversation_id={state.current_conversation_id.clone()}
                    theme={state.theme}
                    on_select={Some(on_select)}
                    on_create={Some(on_create)}
                    on_delete={Some(on_delete)}
                    on_toggle_theme={Some(on_toggle_theme)}
                    config={PanelConfig::new()}
                />
            </aside>
            <main class="flex-1" />
        </div>
    }
}
