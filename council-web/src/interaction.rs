//! Intent events and gesture containment.
//!
//! A user gesture starts at the innermost control and travels outward through
//! the handlers of its ancestors. Each handler may raise an intent and may
//! stop the gesture. A stopped gesture is never handled by an outer control,
//! so a click on a row's delete control raises `Delete` and nothing else.

use shared::models::{ConversationId, IntentKind, PanelDiagnostic};
use yew::Callback;

/// Something the user asked the owner of the panel to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelIntent {
    Select(ConversationId),
    Create,
    Delete(ConversationId),
    ToggleTheme,
}

impl PanelIntent {
    pub const fn kind(&self) -> IntentKind {
        match self {
            Self::Select(_) => IntentKind::Select,
            Self::Create => IntentKind::Create,
            Self::Delete(_) => IntentKind::Delete,
            Self::ToggleTheme => IntentKind::ToggleTheme,
        }
    }
}

/// Whether outer handlers still see the gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Propagation {
    #[default]
    Continue,
    Stop,
}

/// The control inside a row that received the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Body,
    DeleteControl,
}

/// One user activation and the intents it has raised so far.
#[derive(Debug, Default)]
pub struct Gesture {
    propagation: Propagation,
    intents: Vec<PanelIntent>,
}

impl Gesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a gesture that an inner control may already have stopped.
    pub const fn with_propagation(propagation: Propagation) -> Self {
        Self {
            propagation,
            intents: Vec::new(),
        }
    }

    pub fn raise(&mut self, intent: PanelIntent) {
        self.intents.push(intent);
    }

    pub fn stop_propagation(&mut self) {
        self.propagation = Propagation::Stop;
    }

    pub fn is_stopped(&self) -> bool {
        self.propagation == Propagation::Stop
    }

    pub fn into_intents(self) -> Vec<PanelIntent> {
        self.intents
    }
}

/// Handler of a row's delete control. Consumes the gesture.
pub fn on_delete_activated(gesture: &mut Gesture, id: &ConversationId) {
    gesture.raise(PanelIntent::Delete(id.clone()));
    gesture.stop_propagation();
}

/// Handler of a row's body. Ignores gestures an inner control consumed.
pub fn on_row_activated(gesture: &mut Gesture, id: &ConversationId) {
    if gesture.is_stopped() {
        return;
    }
    gesture.raise(PanelIntent::Select(id.clone()));
}

/// Run a click on `target` through every handler it reaches, innermost first.
pub fn resolve_row_gesture(id: &ConversationId, target: RowTarget) -> Vec<PanelIntent> {
    let mut gesture = Gesture::new();
    if target == RowTarget::DeleteControl {
        on_delete_activated(&mut gesture, id);
    }
    on_row_activated(&mut gesture, id);
    gesture.into_intents()
}

/// Callbacks supplied by the owner. Any of them may be absent.
#[derive(Clone, Default, PartialEq)]
pub struct PanelCallbacks {
    pub on_select: Option<Callback<ConversationId>>,
    pub on_create: Option<Callback<()>>,
    pub on_delete: Option<Callback<ConversationId>>,
    pub on_toggle_theme: Option<Callback<()>>,
    pub on_diagnostic: Option<Callback<PanelDiagnostic>>,
}

impl PanelCallbacks {
    /// Emit `intent` to its callback.
    ///
    /// # Errors
    /// Returns [`PanelDiagnostic::MissingCallback`] when the owner supplied no
    /// callback for the intent. Nothing is emitted in that case.
    pub fn dispatch(&self, intent: PanelIntent) -> Result<(), PanelDiagnostic> {
        let kind = intent.kind();
        let missing = || PanelDiagnostic::missing(kind);
        match intent {
            PanelIntent::Select(id) => self.on_select.as_ref().ok_or_else(missing)?.emit(id),
            PanelIntent::Create => self.on_create.as_ref().ok_or_else(missing)?.emit(()),
            PanelIntent::Delete(id) => self.on_delete.as_ref().ok_or_else(missing)?.emit(id),
            PanelIntent::ToggleTheme => {
                self.on_toggle_theme.as_ref().ok_or_else(missing)?.emit(());
            }
        }
        Ok(())
    }

    /// Dispatch every intent of a finished gesture, reporting failures.
    pub fn emit_gesture(&self, gesture: Gesture) {
        for intent in gesture.into_intents() {
            if let Err(diagnostic) = self.dispatch(intent) {
                self.report(diagnostic);
            }
        }
    }

    /// Log a diagnostic and forward it to the owner if it listens.
    pub fn report(&self, diagnostic: PanelDiagnostic) {
        log::warn!("conversation panel: {diagnostic}");
        if let Some(callback) = &self.on_diagnostic {
            callback.emit(diagnostic);
        }
    }
}
