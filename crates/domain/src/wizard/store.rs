//! WizardStore - owns the current snapshot and notifies subscribers
//!
//! Each successful operation swaps in a fresh `Arc<WizardState>`, so
//! observers can detect change with `Arc::ptr_eq` instead of deep
//! comparison. Notification is synchronous: every subscriber has seen the
//! new snapshot by the time the operation returns.

use std::fmt;
use std::sync::Arc;

use crate::error::DomainError;
use crate::wizard::{reduce, WizardCommand, WizardState};

/// Handle returned by [`WizardStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Arc<WizardState>)>;

/// In-memory holder of one questionnaire session.
pub struct WizardStore {
    state: Arc<WizardState>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl WizardStore {
    pub fn new() -> Self {
        Self::with_state(WizardState::default())
    }

    pub fn with_state(state: WizardState) -> Self {
        Self {
            state: Arc::new(state),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> Arc<WizardState> {
        Arc::clone(&self.state)
    }

    /// Register a callback invoked after every change.
    pub fn subscribe(&mut self, callback: impl FnMut(&Arc<WizardState>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Apply a field update.
    ///
    /// A rejected command leaves the snapshot untouched and notifies no one.
    pub fn dispatch(&mut self, command: WizardCommand) -> Result<(), DomainError> {
        let next = reduce(&self.state, command)?;
        self.replace(next);
        Ok(())
    }

    /// Move to the next step. No bound check: advancing past the last step
    /// marks the session as ready to submit.
    pub fn advance(&mut self) {
        let mut next = (*self.state).clone();
        next.current_step += 1;
        self.replace(next);
    }

    /// Move to the previous step, stopping at the first.
    pub fn retreat(&mut self) {
        let mut next = (*self.state).clone();
        next.current_step = next.current_step.saturating_sub(1);
        self.replace(next);
    }

    /// Set the step directly. Reachability is the caller's concern
    /// (see [`crate::wizard::can_jump_to`]).
    pub fn jump_to(&mut self, index: usize) {
        let mut next = (*self.state).clone();
        next.current_step = index;
        self.replace(next);
    }

    /// Discard all answers.
    pub fn reset(&mut self) {
        self.replace(WizardState::default());
    }

    fn replace(&mut self, next: WizardState) {
        self.state = Arc::new(next);
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.state);
        }
    }
}

impl Default for WizardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WizardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EnneagramType, MbtiType};
    use crate::wizard::WizardStep;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_swaps_snapshot() {
        let mut store = WizardStore::new();
        let before = store.state();
        store
            .dispatch(WizardCommand::SetMbti(Some(MbtiType::Intj)))
            .unwrap();
        let after = store.state();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.profile.mbti, None);
        assert_eq!(after.profile.mbti, Some(MbtiType::Intj));
    }

    #[test]
    fn test_rejected_command_keeps_snapshot_and_is_silent() {
        let mut store = WizardStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        let before = store.state();
        let result = store.dispatch(WizardCommand::SetEnneagramWing(Some(EnneagramType::Type2)));
        assert!(result.is_err());
        assert!(Arc::ptr_eq(&before, &store.state()));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_every_operation_notifies() {
        let mut store = WizardStore::new();
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.current_step));

        store.advance();
        store.advance();
        store.retreat();
        store.jump_to(4);
        store.reset();
        store
            .dispatch(WizardCommand::SetSituation("x".into()))
            .unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2, 1, 4, 0, 0]);
    }

    #[test]
    fn test_retreat_floors_at_zero() {
        let mut store = WizardStore::new();
        store.retreat();
        assert_eq!(store.state().current_step, 0);
    }

    #[test]
    fn test_advance_past_last_step_is_submission_ready() {
        let mut store = WizardStore::new();
        for _ in 0..WizardStep::COUNT {
            store.advance();
        }
        assert!(store.state().is_submission_ready());
        assert_eq!(store.state().step(), None);
    }

    #[test]
    fn test_core_change_clears_wing_through_store() {
        let mut store = WizardStore::new();
        store
            .dispatch(WizardCommand::SetEnneagramCore(Some(EnneagramType::Type1)))
            .unwrap();
        store
            .dispatch(WizardCommand::SetEnneagramWing(Some(EnneagramType::Type9)))
            .unwrap();
        store
            .dispatch(WizardCommand::SetEnneagramCore(Some(EnneagramType::Type2)))
            .unwrap();
        assert_eq!(store.state().profile.enneagram_wing, None);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = WizardStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);
        store.advance();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.advance();
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = WizardStore::new();
        store
            .dispatch(WizardCommand::SetObjectives("Run a marathon".into()))
            .unwrap();
        store.advance();
        store.reset();
        assert_eq!(*store.state(), WizardState::default());
    }
}
