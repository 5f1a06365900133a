//! Toast notifications
//!
//! One toast at a time; a newer toast replaces the visible one.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Copy)]
pub struct ToastState {
    current: Signal<Option<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            next_id: Signal::new(0),
        }
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.read().clone()
    }

    pub fn show(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        let id = *self.next_id.peek() + 1;
        self.next_id.set(id);
        self.current.set(Some(Toast {
            id,
            kind,
            title: title.into(),
            description: description.filter(|d| !d.is_empty()),
        }));
        id
    }

    /// Hide toast `id` if it is still the one showing
    pub fn dismiss(&mut self, id: u64) {
        let showing = self.current.peek().as_ref().map(|t| t.id);
        if showing == Some(id) {
            self.current.set(None);
        }
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast_state() -> ToastState {
    use_context::<ToastState>()
}
