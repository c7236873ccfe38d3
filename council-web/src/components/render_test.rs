//! Rendering and interaction tests for the conversation panel
//!
//! Server-side rendering covers markup; the click tests mount the panel in
//! the browser and drive it through real DOM events.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use shared::models::{ConversationId, ConversationSummary, PanelDiagnostic, Theme};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::{Callback, LocalServerRenderer};

use super::conversation_list_panel::ConversationListPanelProps;
use super::{ConversationListPanel, class_names};
use crate::config::{MessageCountSlot, PanelConfig};

wasm_bindgen_test_configure!(run_in_browser);

type Log = Rc<RefCell<Vec<String>>>;

fn sample() -> Vec<ConversationSummary> {
    vec![
        ConversationSummary::new("c1", Some("Budget review"), 3),
        ConversationSummary::new("c2", Some("Trip ideas"), 1),
        ConversationSummary::new("c3", None, 0),
    ]
}

fn props(
    conversations: Vec<ConversationSummary>,
    current: Option<&str>,
    theme: Option<Theme>,
    log: &Log,
) -> ConversationListPanelProps {
    let select_log = log.clone();
    let create_log = log.clone();
    let delete_log = log.clone();
    let toggle_log = log.clone();
    ConversationListPanelProps {
        conversations,
        current_conversation_id: current.map(ConversationId::new),
        theme,
        on_select: Some(Callback::from(move |id: ConversationId| {
            select_log.borrow_mut().push(format!("select:{id}"));
        })),
        on_create: Some(Callback::from(move |()| {
            create_log.borrow_mut().push("create".to_string());
        })),
        on_delete: Some(Callback::from(move |id: ConversationId| {
            delete_log.borrow_mut().push(format!("delete:{id}"));
        })),
        on_toggle_theme: Some(Callback::from(move |()| {
            toggle_log.borrow_mut().push("toggle".to_string());
        })),
        on_diagnostic: None,
        config: PanelConfig::default(),
    }
}

async fn render(props: ConversationListPanelProps) -> String {
    LocalServerRenderer::<ConversationListPanel>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

async fn render_with_slot(slot: MessageCountSlot) -> String {
    let mut panel_props = props(sample(), None, None, &Log::default());
    panel_props.config = PanelConfig {
        count_slot: slot,
        ..PanelConfig::default()
    };
    render(panel_props).await
}

fn row_marker() -> String {
    format!("class=\"{} ", class_names::ROW)
}

fn active_row_marker() -> String {
    format!("class=\"{} {} ", class_names::ROW, class_names::ROW_ACTIVE)
}

#[wasm_bindgen_test]
async fn empty_list_renders_single_placeholder() {
    let html = render(props(Vec::new(), None, None, &Log::default())).await;

    assert_eq!(html.matches("No conversations yet").count(), 1);
    assert_eq!(html.matches(&row_marker()).count(), 0);
    assert!(html.contains("+ New Conversation"));
    assert!(html.contains("LLM Council"));
}

#[wasm_bindgen_test]
async fn rows_render_in_order_with_titles_and_counts() {
    let html = render(props(sample(), None, None, &Log::default())).await;

    assert_eq!(html.matches(&row_marker()).count(), 3);
    let budget = html.find("Budget review").unwrap();
    let trip = html.find("Trip ideas").unwrap();
    let untitled = html.find(">New Conversation</div>").unwrap();
    assert!(budget < trip && trip < untitled);

    assert!(html.contains("3 messages"));
    assert!(html.contains("1 message<"));
    assert!(html.contains("0 messages"));
    assert!(!html.contains("No conversations yet"));
}

#[wasm_bindgen_test]
async fn only_current_row_is_active() {
    let html = render(props(sample(), Some("c2"), None, &Log::default())).await;
    assert_eq!(html.matches(&active_row_marker()).count(), 1);
    let active = html.find(&active_row_marker()).unwrap();
    let trip = html.find("Trip ideas").unwrap();
    let budget = html.find("Budget review").unwrap();
    assert!(budget < active && active < trip);

    let html = render(props(sample(), Some("c9"), None, &Log::default())).await;
    assert_eq!(html.matches(&active_row_marker()).count(), 0);

    let html = render(props(sample(), None, None, &Log::default())).await;
    assert_eq!(html.matches(&active_row_marker()).count(), 0);
}

#[wasm_bindgen_test]
async fn theme_control_label_is_inverted() {
    let html = render(props(Vec::new(), None, Some(Theme::Dark), &Log::default())).await;
    assert!(html.contains("<span>Light</span>"));

    let html = render(props(Vec::new(), None, Some(Theme::Light), &Log::default())).await;
    assert!(html.contains("<span>Dark</span>"));

    let html = render(props(Vec::new(), None, None, &Log::default())).await;
    assert!(!html.contains(class_names::THEME_TOGGLE));
}

#[wasm_bindgen_test]
async fn badge_slot_shows_count_once() {
    let html = render_with_slot(MessageCountSlot::Badge).await;

    assert_eq!(html.matches(class_names::ROW_COUNT_BADGE).count(), 3);
    assert!(!html.contains(class_names::ROW_META));
    assert_eq!(html.matches("3 messages").count(), 1);
}

#[wasm_bindgen_test]
async fn hidden_slot_shows_no_count() {
    let html = render_with_slot(MessageCountSlot::Hidden).await;

    assert!(!html.contains(class_names::ROW_COUNT_BADGE));
    assert!(!html.contains(class_names::ROW_META));
    assert!(!html.contains("messages"));
}

#[wasm_bindgen_test]
async fn delete_control_is_labelled() {
    let html = render(props(sample(), None, None, &Log::default())).await;
    assert_eq!(html.matches("aria-label=\"Delete conversation\"").count(), 3);
}

async fn mount(props: ConversationListPanelProps) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    yew::Renderer::<ConversationListPanel>::with_root_and_props(root.clone(), props).render();
    yew::platform::time::sleep(Duration::from_millis(10)).await;
    root
}

fn click(root: &web_sys::Element, selector: &str, index: u32) {
    root.query_selector_all(selector)
        .unwrap()
        .item(index)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
async fn clicking_row_selects_once() {
    let log = Log::default();
    let root = mount(props(sample(), None, None, &log)).await;

    click(&root, &format!(".{}", class_names::ROW_TITLE), 1);
    assert_eq!(*log.borrow(), vec!["select:c2"]);
}

#[wasm_bindgen_test]
async fn clicking_delete_never_selects() {
    let log = Log::default();
    let root = mount(props(sample(), Some("c1"), None, &log)).await;

    click(&root, &format!(".{}", class_names::DELETE), 0);
    assert_eq!(*log.borrow(), vec!["delete:c1"]);
}

#[wasm_bindgen_test]
async fn clicking_create_and_toggle_emit_one_intent_each() {
    let log = Log::default();
    let root = mount(props(Vec::new(), None, Some(Theme::Dark), &log)).await;

    click(&root, &format!(".{}", class_names::NEW_CONVERSATION), 0);
    assert_eq!(*log.borrow(), vec!["create"]);

    log.borrow_mut().clear();
    click(&root, &format!(".{}", class_names::THEME_TOGGLE), 0);
    assert_eq!(*log.borrow(), vec!["toggle"]);

    // The label only follows the owner's theme prop.
    yew::platform::time::sleep(Duration::from_millis(10)).await;
    let label = root
        .query_selector(&format!(".{} span", class_names::THEME_TOGGLE))
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap();
    assert_eq!(label, "Light");
}

#[wasm_bindgen_test]
async fn duplicate_ids_render_every_row_and_are_reported() {
    let log = Log::default();
    let diagnostic_log = log.clone();
    let conversations = vec![
        ConversationSummary::new("c1", Some("First"), 1),
        ConversationSummary::new("c1", Some("Second"), 2),
    ];
    let panel_props = ConversationListPanelProps {
        on_diagnostic: Some(Callback::from(move |diagnostic: PanelDiagnostic| {
            diagnostic_log.borrow_mut().push(diagnostic.to_string());
        })),
        ..props(conversations, Some("c1"), None, &log)
    };

    let root = mount(panel_props).await;

    let rows = root
        .query_selector_all(&format!(".{}", class_names::ROW))
        .unwrap();
    assert_eq!(rows.length(), 2);
    let active = root
        .query_selector_all(&format!(".{}.{}", class_names::ROW, class_names::ROW_ACTIVE))
        .unwrap();
    assert_eq!(active.length(), 1);
    let text = root.text_content().unwrap();
    assert!(text.contains("First") && text.contains("Second"));
    assert_eq!(
        *log.borrow(),
        vec!["duplicate conversation id `c1` at position 1 (first seen at 0)"]
    );
}

#[wasm_bindgen_test]
async fn missing_delete_callback_is_a_no_op() {
    let log = Log::default();
    let panel_props = ConversationListPanelProps {
        on_delete: None,
        ..props(sample(), None, None, &log)
    };
    let root = mount(panel_props).await;

    click(&root, &format!(".{}", class_names::DELETE), 0);
    assert!(log.borrow().is_empty());
}
