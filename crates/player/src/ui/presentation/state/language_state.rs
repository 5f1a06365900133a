//! UI language

use dioxus::prelude::*;
use growthwise_domain::Language;

use crate::application::i18n::{translate, translate_with};
use crate::application::settings::persist_language;
use crate::ports::outbound::PlatformPort;

#[derive(Clone, Copy)]
pub struct LanguageState {
    language: Signal<Language>,
}

impl LanguageState {
    pub fn new(initial: Language) -> Self {
        Self {
            language: Signal::new(initial),
        }
    }

    pub fn language(&self) -> Language {
        *self.language.read()
    }

    /// Switch to the other language and remember the choice
    pub fn toggle(&mut self, platform: &dyn PlatformPort) {
        let next = self.language.peek().toggled();
        self.language.set(next);
        persist_language(platform, next);
        tracing::debug!(language = %next, "Language switched");
    }

    /// Translated text, or `fallback`
    pub fn t(&self, key: &str, fallback: &str) -> String {
        translate(self.language(), key, fallback).to_string()
    }

    pub fn t_with(&self, key: &str, fallback: &str, args: &[(&str, &str)]) -> String {
        translate_with(self.language(), key, fallback, args)
    }
}

pub fn use_language_state() -> LanguageState {
    use_context::<LanguageState>()
}
