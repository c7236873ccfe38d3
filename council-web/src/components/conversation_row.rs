use shared::models::{ConversationId, ConversationSummary, PanelDiagnostic};
use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};

use super::class_names;
use crate::config::{MessageCountSlot, PanelConfig};
use crate::interaction::{
    Gesture, PanelCallbacks, Propagation, on_delete_activated, on_row_activated,
};
use crate::view::RowView;

pub const DELETE_LABEL: &str = "Delete";
pub const DELETE_ARIA_LABEL: &str = "Delete conversation";

#[derive(Properties, PartialEq)]
pub struct ConversationRowProps {
    pub summary: ConversationSummary,
    #[prop_or(false)]
    pub is_active: bool,
    #[prop_or_default]
    pub on_select: Option<Callback<ConversationId>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<ConversationId>>,
    #[prop_or_default]
    pub on_diagnostic: Option<Callback<PanelDiagnostic>>,
    #[prop_or_default]
    pub config: PanelConfig,
}

/// One conversation in the panel.
///
/// The delete control sits inside the clickable row. Its handler consumes
/// the click, so the row's select handler never runs for the same gesture.
#[function_component(ConversationRow)]
pub fn conversation_row(props: &ConversationRowProps) -> Html {
    let view = RowView::build(&props.summary, props.is_active, &props.config);
    let callbacks = PanelCallbacks {
        on_select: props.on_select.clone(),
        on_delete: props.on_delete.clone(),
        on_diagnostic: props.on_diagnostic.clone(),
        ..PanelCallbacks::default()
    };

    let on_row_click = {
        let callbacks = callbacks.clone();
        let id = props.summary.id.clone();
        Callback::from(move |event: MouseEvent| {
            let propagation = if event.cancel_bubble() {
                Propagation::Stop
            } else {
                Propagation::Continue
            };
            let mut gesture = Gesture::with_propagation(propagation);
            on_row_activated(&mut gesture, &id);
            callbacks.emit_gesture(gesture);
        })
    };

    let on_delete_click = {
        let id = props.summary.id.clone();
        Callback::from(move |event: MouseEvent| {
            let mut gesture = Gesture::new();
            on_delete_activated(&mut gesture, &id);
            if gesture.is_stopped() {
                event.stop_propagation();
            }
            callbacks.emit_gesture(gesture);
        })
    };

    let count_in = |slot: MessageCountSlot| {
        view.count_text
            .as_ref()
            .filter(|_| view.count_slot == slot)
            .cloned()
    };
    let badge = count_in(MessageCountSlot::Badge).map_or_else(Html::default, |text| {
        html! {
            <span class={classes!(class_names::ROW_COUNT_BADGE, "badge", "badge-sm")}>{ text }</span>
        }
    });
    let meta = count_in(MessageCountSlot::Meta).map_or_else(Html::default, |text| {
        html! {
            <div class={classes!(class_names::ROW_META, "text-xs", "text-base-content/60")}>{ text }</div>
        }
    });

    let row_class = classes!(
        class_names::ROW,
        view.is_active.then_some(class_names::ROW_ACTIVE),
        "p-3",
        "cursor-pointer"
    );

    html! {
        <div
            class={row_class}
            onclick={on_row_click}
            aria-current={view.is_active.then_some("true")}
        >
            <div class={classes!(class_names::ROW_TITLE_ROW, "flex", "items-center", "gap-2")}>
                <div class={classes!(class_names::ROW_TITLE, "flex-1", "truncate", "text-sm", "font-medium")}>
                    { view.title.clone() }
                </div>
                { badge }
                <div class={class_names::ROW_ACTIONS}>
                    <button
                        type="button"
                        class={classes!(class_names::DELETE, "btn", "btn-ghost", "btn-xs")}
                        onclick={on_delete_click}
                        aria-label={DELETE_ARIA_LABEL}
                    >
                        { DELETE_LABEL }
                    </button>
                </div>
            </div>
            { meta }
        </div>
    }
}
