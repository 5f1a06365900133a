use crate::application::settings::startup_language;
use crate::ports::outbound::PlatformPort;
use crate::presentation::services::{AppConfig, Services};
use crate::presentation::state::{LanguageState, PlanState, QuestionnaireState, ToastState};
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let config = use_context::<AppConfig>();
    let platform = use_platform();

    // These must be created inside an active Dioxus runtime.
    use_context_provider(|| Services::from_config(&config));
    use_context_provider(QuestionnaireState::new);
    use_context_provider(PlanState::new);
    use_context_provider(ToastState::new);
    use_context_provider(|| {
        LanguageState::new(startup_language(
            config.language.as_deref(),
            platform.as_ref(),
        ))
    });

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/app.css"),
        }

        Router::<routes::Route> {}
    }
}
