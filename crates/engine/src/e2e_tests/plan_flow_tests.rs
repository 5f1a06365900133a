//! Questionnaire to generated plan, through the HTTP client.
//!
//! Tests verify:
//! - A successful response becomes a Remote plan
//! - Every endpoint failure becomes the exact local fallback plan
//! - Walking the five steps from defaults yields a complete plan

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use growthwise_domain::{
    is_step_complete, Language, MbtiType, TimeOfDay, WizardCommand, WizardStep, WizardStore,
};

use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::config::ApiCredential;
use crate::plan::{
    synthesize_local_plan, PlanGenerationService, PlanRequest, PlanSection, PlanSource,
};
use crate::test_fixtures::{client_for, completion_body, enfp_questionnaire, StubEndpoint};

fn service_for(stub: &StubEndpoint) -> PlanGenerationService {
    let client = client_for(&stub.base_url, Duration::from_secs(2));
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap());
    PlanGenerationService::new(Arc::new(client), Arc::new(clock))
}

fn credential() -> ApiCredential {
    ApiCredential::new("sk-e2e").unwrap()
}

#[tokio::test]
async fn test_enfp_questionnaire_remote_plan() {
    let remote = "# ENFP Growth Plan\n\n## 1. Personality Strengths & Weaknesses Analysis\n- Curiosity";
    let stub = StubEndpoint::start(StatusCode::OK, completion_body(remote)).await;

    let request = PlanRequest::new(Arc::new(enfp_questionnaire()), Language::En);
    let plan = service_for(&stub).generate(&request, Some(&credential())).await;

    assert_eq!(plan.source, PlanSource::Remote);
    assert_eq!(plan.content, remote);
    assert_eq!(plan.language, Language::En);

    let captured = stub.captured();
    let body = captured.body.unwrap();
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("ENFP"));
    assert!(user.contains("7w6"));
    assert!(user.contains("Freelance illustrator juggling many clients"));
    assert!(user.contains("- Improve productivity\n- Manage stress more effectively"));
    assert!(user.contains("Evening"));
    assert!(user.contains("13.5 hours"));
}

#[tokio::test]
async fn test_http_500_yields_exact_fallback() {
    let stub = StubEndpoint::start(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;

    let state = Arc::new(enfp_questionnaire());
    let request = PlanRequest::new(Arc::clone(&state), Language::En);
    let plan = service_for(&stub).generate(&request, Some(&credential())).await;

    assert_eq!(plan.source, PlanSource::Fallback);
    assert_eq!(plan.content, synthesize_local_plan(&state, Language::En));
    assert_eq!(stub.captured().hits, 1);
}

#[tokio::test]
async fn test_malformed_body_yields_fallback_in_chinese() {
    let stub = StubEndpoint::start(StatusCode::OK, "<html>gateway</html>").await;

    let state = Arc::new(enfp_questionnaire());
    let request = PlanRequest::new(Arc::clone(&state), Language::Zh);
    let plan = service_for(&stub).generate(&request, Some(&credential())).await;

    assert!(plan.is_fallback());
    assert_eq!(plan.content, synthesize_local_plan(&state, Language::Zh));
    assert!(plan.content.contains("你的个性化成长计划"));
}

#[tokio::test]
async fn test_store_snapshot_feeds_generation() {
    let stub = StubEndpoint::start(StatusCode::OK, completion_body("# Plan")).await;

    let mut store = WizardStore::with_state(enfp_questionnaire());
    for _ in 0..5 {
        store.advance();
    }
    let snapshot = store.state();
    assert!(snapshot.is_submission_ready());

    let request = PlanRequest::new(snapshot, Language::En);
    let plan = service_for(&stub).generate(&request, None).await;

    // No credential: the endpoint is never contacted
    assert!(plan.is_fallback());
    assert_eq!(stub.captured().hits, 0);
}

/// Minimal valid answers for one step.
fn answer(step: WizardStep) -> Vec<WizardCommand> {
    match step {
        WizardStep::Personality => vec![WizardCommand::SetMbti(Some(MbtiType::Enfp))],
        WizardStep::Situation => vec![WizardCommand::SetSituation("Graduate student".into())],
        WizardStep::Time => vec![WizardCommand::SetPreferredTime(TimeOfDay::Morning)],
        WizardStep::Goals => vec![WizardCommand::SetGoal {
            slot: 0,
            value: "Build confidence".into(),
        }],
        WizardStep::Objectives => vec![WizardCommand::SetObjectives("Finish my thesis".into())],
    }
}

#[tokio::test]
async fn test_walk_all_steps_from_defaults_to_plan() {
    let stub = StubEndpoint::start(StatusCode::INTERNAL_SERVER_ERROR, "down").await;

    for language in Language::all() {
        let mut store = WizardStore::new();
        while let Some(step) = store.state().step() {
            assert!(!is_step_complete(&store.state(), step) || step == WizardStep::Time);
            for command in answer(step) {
                store.dispatch(command).unwrap();
            }
            assert!(is_step_complete(&store.state(), step), "{step:?} incomplete");
            store.advance();
        }

        let snapshot = store.state();
        assert!(snapshot.is_submission_ready());

        let request = PlanRequest::new(snapshot, *language);
        let plan = service_for(&stub).generate(&request, Some(&credential())).await;

        assert_eq!(plan.language, *language);
        assert!(plan.content.contains("ENFP"));
        for section in PlanSection::all() {
            let heading = section.markdown_heading(*language);
            assert!(plan.content.contains(&heading), "missing {heading}");
        }
    }
}

