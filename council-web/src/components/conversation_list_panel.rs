use shared::models::{ConversationId, ConversationSummary, PanelDiagnostic, Theme};
use yew::{
    Callback, Html, MouseEvent, Properties, classes, function_component, html, use_effect_with,
};
use yew_icons::{Icon, IconId};

use super::{ConversationRow, ThemeToggleControl, class_names};
use crate::config::PanelConfig;
use crate::interaction::{Gesture, PanelCallbacks, PanelIntent};
use crate::view::{EMPTY_LIST_TEXT, NEW_CONVERSATION_LABEL, PanelInputs, PanelView};

#[derive(Properties, PartialEq)]
pub struct ConversationListPanelProps {
    /// Conversations in the order the owner wants them shown.
    pub conversations: Vec<ConversationSummary>,
    #[prop_or(None)]
    pub current_conversation_id: Option<ConversationId>,
    /// Supplying a theme enables the theme control.
    #[prop_or(None)]
    pub theme: Option<Theme>,
    #[prop_or_default]
    pub on_select: Option<Callback<ConversationId>>,
    #[prop_or_default]
    pub on_create: Option<Callback<()>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<ConversationId>>,
    #[prop_or_default]
    pub on_toggle_theme: Option<Callback<()>>,
    /// Receives caller-contract violations such as duplicate ids.
    #[prop_or_default]
    pub on_diagnostic: Option<Callback<PanelDiagnostic>>,
    #[prop_or_default]
    pub config: PanelConfig,
}

impl ConversationListPanelProps {
    fn callbacks(&self) -> PanelCallbacks {
        PanelCallbacks {
            on_select: self.on_select.clone(),
            on_create: self.on_create.clone(),
            on_delete: self.on_delete.clone(),
            on_toggle_theme: self.on_toggle_theme.clone(),
            on_diagnostic: self.on_diagnostic.clone(),
        }
    }
}

fn intent_callback(callbacks: &PanelCallbacks, intent: PanelIntent) -> Callback<()> {
    let callbacks = callbacks.clone();
    Callback::from(move |()| {
        let mut gesture = Gesture::new();
        gesture.raise(intent.clone());
        callbacks.emit_gesture(gesture);
    })
}

/// Navigation panel listing the owner's conversations.
///
/// Holds no state: everything shown is derived from the props of the current
/// render, and every interaction is handed back to the owner as an intent.
#[function_component(ConversationListPanel)]
pub fn conversation_list_panel(props: &ConversationListPanelProps) -> Html {
    let view = PanelView::build(PanelInputs {
        conversations: &props.conversations,
        current_conversation_id: props.current_conversation_id.as_ref(),
        theme: props.theme,
        config: &props.config,
    });
    let callbacks = props.callbacks();

    {
        let callbacks = callbacks.clone();
        use_effect_with(view.diagnostics.clone(), move |diagnostics| {
            for diagnostic in diagnostics {
                callbacks.report(diagnostic.clone());
            }
            || ()
        });
    }

    let theme_control = props.theme.map_or_else(Html::default, |theme| {
        let on_toggle = intent_callback(&callbacks, PanelIntent::ToggleTheme);
        html! { <ThemeToggleControl {theme} {on_toggle} /> }
    });

    let on_create_click =
        intent_callback(&callbacks, PanelIntent::Create).reform(|_: MouseEvent| ());

    let body = if view.shows_placeholder() {
        html! {
            <div class={classes!(class_names::EMPTY, "p-4", "text-sm", "text-base-content/70")}>
                { EMPTY_LIST_TEXT }
            </div>
        }
    } else {
        html! {
            <>{ for view.rows.iter().map(|row| html! {
                <ConversationRow
                    key={row.key.clone()}
                    summary={row.summary.clone()}
                    is_active={row.is_active}
                    on_select={props.on_select.clone()}
                    on_delete={props.on_delete.clone()}
                    on_diagnostic={props.on_diagnostic.clone()}
                    config={props.config.clone()}
                />
            }) }</>
        }
    };

    html! {
        <div class={classes!(class_names::CONTAINER, "flex", "flex-col", "h-full", "bg-base-200")}>
            <div class={classes!(class_names::HEADER, "p-4", "space-y-3")}>
                <div class={classes!(class_names::TITLE_ROW, "flex", "items-center", "justify-between", "gap-2")}>
                    <h1 class="flex items-center gap-2 text-lg font-semibold">
                        <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="h-5 w-5" />
                        { view.title.to_string() }
                    </h1>
                    { theme_control }
                </div>
                <button
                    type="button"
                    class={classes!(class_names::NEW_CONVERSATION, "btn", "btn-primary", "btn-block")}
                    onclick={on_create_click}
                >
                    { NEW_CONVERSATION_LABEL }
                </button>
            </div>
            <div class={classes!(class_names::LIST, "flex-1", "overflow-y-auto", "divide-y", "divide-base-300")}>
                { body }
            </div>
        </div>
    }
}
