//! Questionnaire state
//!
//! Wraps the [`WizardStore`] for the UI. The store stays the single source
//! of truth; a subscriber mirrors each new snapshot into a signal so
//! components re-render.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use growthwise_domain::{DomainError, WizardCommand, WizardState, WizardStore};
use growthwise_engine::ApiCredential;

#[derive(Clone)]
pub struct QuestionnaireState {
    store: Rc<RefCell<WizardStore>>,
    snapshot: Signal<Arc<WizardState>>,
    /// Fixed for the whole session once it starts
    credential: Signal<Option<ApiCredential>>,
    session_started: Signal<bool>,
}

impl QuestionnaireState {
    pub fn new() -> Self {
        let mut store = WizardStore::new();
        let mut snapshot = Signal::new(store.state());
        store.subscribe(move |state| snapshot.set(Arc::clone(state)));

        Self {
            store: Rc::new(RefCell::new(store)),
            snapshot,
            credential: Signal::new(None),
            session_started: Signal::new(false),
        }
    }

    /// Current answers; subscribes the calling component.
    pub fn snapshot(&self) -> Arc<WizardState> {
        self.snapshot.read().clone()
    }

    /// Current answers without subscribing.
    pub fn peek(&self) -> Arc<WizardState> {
        self.snapshot.peek().clone()
    }

    /// Apply one answer update. Rejected commands leave the answers unchanged.
    pub fn dispatch(&self, command: WizardCommand) -> Result<(), DomainError> {
        let name = command.name();
        let result = self.store.borrow_mut().dispatch(command);
        if let Err(e) = &result {
            tracing::error!(command = name, error = %e, "Questionnaire command rejected");
        }
        result
    }

    pub fn advance(&self) {
        self.store.borrow_mut().advance();
    }

    pub fn retreat(&self) {
        self.store.borrow_mut().retreat();
    }

    pub fn jump_to(&self, index: usize) {
        self.store.borrow_mut().jump_to(index);
    }

    /// Fresh answers and a newly resolved credential.
    pub fn start_session(&mut self, credential: Option<ApiCredential>) {
        self.store.borrow_mut().reset();
        tracing::info!(has_credential = credential.is_some(), "Questionnaire session started");
        self.credential.set(credential);
        self.session_started.set(true);
    }

    /// Start a session unless one is already running (e.g. a direct link to
    /// the questionnaire). Answers are kept.
    pub fn ensure_session(&mut self, resolve: impl FnOnce() -> Option<ApiCredential>) {
        if *self.session_started.peek() {
            return;
        }
        let credential = resolve();
        tracing::info!(has_credential = credential.is_some(), "Questionnaire session started");
        self.credential.set(credential);
        self.session_started.set(true);
    }

    pub fn credential(&self) -> Option<ApiCredential> {
        self.credential.peek().clone()
    }
}

impl Default for QuestionnaireState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_questionnaire_state() -> QuestionnaireState {
    use_context::<QuestionnaireState>()
}
