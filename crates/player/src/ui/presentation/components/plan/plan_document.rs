//! Rendered plan with copy and export actions

use dioxus::prelude::*;
use growthwise_engine::export::ExportFormat;
use growthwise_engine::GeneratedPlan;

use crate::application::export::build_export;
use crate::application::markdown::render_plan;
use crate::ports::outbound::ExportLocation;
use crate::presentation::state::{
    use_language_state, use_questionnaire_state, use_toast_state, ToastKind,
};
use crate::presentation::utils::copy_to_clipboard;
use crate::use_platform;

const COPIED_LABEL_MS: u64 = 2000;

#[component]
pub fn PlanDocument(plan: GeneratedPlan) -> Element {
    let lang = use_language_state();
    let mut toasts = use_toast_state();
    let questionnaire = use_questionnaire_state();
    let platform = use_platform();
    let mut copied = use_signal(|| false);

    let html = render_plan(&plan);

    let on_copy = {
        let content = plan.content.clone();
        let platform = platform.clone();
        move |_| {
            let content = content.clone();
            let platform = platform.clone();
            spawn(async move {
                match copy_to_clipboard(&content).await {
                    Ok(()) => {
                        copied.set(true);
                        toasts.show(
                            ToastKind::Success,
                            lang.t("toast.copied", "Content copied to clipboard"),
                            Some(lang.t(
                                "toast.copied.desc",
                                "You can now paste your growth plan anywhere",
                            )),
                        );
                        platform.sleep_ms(COPIED_LABEL_MS).await;
                        copied.set(false);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Copy to clipboard failed");
                        toasts.show(
                            ToastKind::Error,
                            lang.t("toast.copy_failed", "Could not access the clipboard"),
                            None,
                        );
                    }
                }
            });
        }
    };

    let export = {
        let content = plan.content.clone();
        move |format: ExportFormat| {
            let mut toasts = toasts;
            let profile = questionnaire.peek().profile;
            let file = build_export(&content, &profile, format);
            match platform.save_export(&file) {
                Ok(ExportLocation::BrowserDownload) => {
                    toasts.show(
                        ToastKind::Success,
                        lang.t("toast.downloaded", "Plan downloaded successfully"),
                        None,
                    );
                }
                Ok(location @ ExportLocation::File(_)) => {
                    let description = location.describe();
                    toasts.show(
                        ToastKind::Success,
                        lang.t("toast.downloaded", "Plan downloaded successfully"),
                        Some(lang.t_with(
                            "toast.saved_as",
                            "Saved as {filename}",
                            &[("filename", description.as_str())],
                        )),
                    );
                }
                Err(e) => {
                    tracing::error!(filename = %file.filename, error = %e, "Export failed");
                    toasts.show(
                        ToastKind::Error,
                        lang.t("toast.export_failed", "Export failed"),
                        Some(e.to_string()),
                    );
                }
            }
        }
    };
    let export_md = {
        let export = export.clone();
        move |_| export(ExportFormat::Markdown)
    };
    let export_svg = {
        let export = export.clone();
        move |_| export(ExportFormat::MindMapSvg)
    };
    let export_html = move |_| export(ExportFormat::MindMapHtml);

    let copy_label = if copied() {
        lang.t("copied", "Copied")
    } else {
        lang.t("copy", "Copy")
    };

    rsx! {
        article { class: "plan-document",
            header { class: "plan-toolbar",
                h2 { {lang.t("plan.heading", "Your Personalized Growth Plan")} }
                div { class: "plan-actions",
                    button { class: "button button-outline", onclick: on_copy, "{copy_label}" }
                    button { class: "button button-primary", onclick: export_md,
                        {lang.t("download", "Download")}
                    }
                    button { class: "button button-outline", onclick: export_svg,
                        {lang.t("export.svg", "Mind map (SVG)")}
                    }
                    button { class: "button button-outline", onclick: export_html,
                        {lang.t("export.html", "Mind map (HTML)")}
                    }
                }
            }
            div { class: "plan-body", dangerous_inner_html: "{html}" }
        }
    }
}
