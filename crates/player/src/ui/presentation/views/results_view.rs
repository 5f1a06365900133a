//! Results page
//!
//! Starts one generation on mount and shows the loading animation until the
//! plan arrives. Leaving the page cancels the pending request, so a late
//! result is discarded instead of overwriting a newer submission.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use growthwise_engine::PlanRequest;

use crate::application::plan_tracker::PlanStatus;
use crate::presentation::components::common::LoadingAnimation;
use crate::presentation::components::plan::PlanDocument;
use crate::presentation::services::use_services;
use crate::presentation::state::{
    use_language_state, use_plan_state, use_questionnaire_state, use_toast_state, ToastKind,
};
use crate::routes::Route;

#[component]
pub fn ResultsView() -> Element {
    let lang = use_language_state();
    let questionnaire = use_questionnaire_state();
    let mut plan_state = use_plan_state();
    let mut toasts = use_toast_state();
    let services = use_services();
    let navigator = use_navigator();
    let pending = use_hook(|| Rc::new(Cell::new(None::<u64>)));

    let ready = questionnaire.peek().is_submission_ready();

    use_effect(move || {
        if !ready {
            tracing::debug!("No submitted answers, back to the questionnaire");
            navigator.replace(Route::QuestionnaireRoute {});
        }
    });

    // Language at submission time; switching later does not regenerate.
    let language = use_hook(|| lang.language());
    use_effect({
        let pending = Rc::clone(&pending);
        let questionnaire = questionnaire.clone();
        move || {
            let state = questionnaire.peek();
            if !state.is_submission_ready() || !plan_state.is_idle() {
                return;
            }

            let ticket = plan_state.begin();
            pending.set(Some(ticket.id()));
            let request = PlanRequest::new(state, language);
            let credential = questionnaire.credential();
            let service = services.plan.clone();
            tracing::info!(ticket = ticket.id(), language = %request.language, "Generating plan");

            spawn(async move {
                let plan = service.generate(&request, credential.as_ref()).await;
                let fallback = plan.is_fallback();
                if plan_state.commit(ticket, plan) && fallback {
                    toasts.show(
                        ToastKind::Info,
                        lang.t("toast.fallback", "Showing a locally generated plan"),
                        Some(lang.t(
                            "toast.fallback.desc",
                            "The plan service could not be reached, so this plan was assembled on your device.",
                        )),
                    );
                }
            });
        }
    });

    use_drop({
        let pending = Rc::clone(&pending);
        move || {
            if let Some(id) = pending.take() {
                plan_state.cancel(id);
            }
        }
    });

    let status = plan_state.status();
    let subtitle = match status {
        PlanStatus::Ready(_) => lang.t(
            "results.ready",
            "Your plan is ready! Download it or copy the content below.",
        ),
        _ => lang.t(
            "results.loading",
            "We're creating your personalized growth plan based on your inputs...",
        ),
    };

    rsx! {
        div { class: "page results-page",
            header { class: "page-header",
                Link { class: "back-link", to: Route::QuestionnaireRoute {},
                    "← "
                    {lang.t("back.questionnaire", "Back to Questionnaire")}
                }
                h1 { {lang.t("results.title", "Your Growth Plan")} }
                p { class: "page-subtitle", "{subtitle}" }
            }

            match status {
                PlanStatus::Ready(plan) => rsx! { PlanDocument { plan } },
                _ => rsx! { LoadingAnimation {} },
            }

            div { class: "results-footer",
                Link { class: "button button-outline", to: Route::HomeRoute {},
                    {lang.t("return.home", "Return to Home")}
                }
            }
        }
    }
}
