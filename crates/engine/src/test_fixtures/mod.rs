//! Test fixtures: canned questionnaires and a stub completion endpoint.

pub mod stub_endpoint;

use std::time::Duration;

use growthwise_domain::{
    reduce, EnneagramType, MbtiType, TimeOfDay, WizardCommand, WizardState,
};

use crate::infrastructure::config::CompletionConfig;
use crate::infrastructure::openai::OpenAiCompatibleClient;

pub use stub_endpoint::{completion_body, CapturedRequest, StubEndpoint};

/// Apply commands in order to a fresh questionnaire.
///
/// # Panics
///
/// Panics if any command is rejected.
pub fn questionnaire(commands: impl IntoIterator<Item = WizardCommand>) -> WizardState {
    commands
        .into_iter()
        .fold(WizardState::default(), |state, cmd| reduce(&state, cmd).unwrap())
}

/// ENFP, 7w6, evening sessions, two goals, every step complete.
pub fn enfp_questionnaire() -> WizardState {
    questionnaire([
        WizardCommand::SetMbti(Some(MbtiType::Enfp)),
        WizardCommand::SetEnneagramCore(Some(EnneagramType::Type7)),
        WizardCommand::SetEnneagramWing(Some(EnneagramType::Type6)),
        WizardCommand::SetSituation("Freelance illustrator juggling many clients".into()),
        WizardCommand::SetWeekdayHours(1.5),
        WizardCommand::SetWeekendHours(3.0),
        WizardCommand::SetPreferredTime(TimeOfDay::Evening),
        WizardCommand::SetGoal {
            slot: 0,
            value: "Improve productivity".into(),
        },
        WizardCommand::SetGoal {
            slot: 1,
            value: "Manage stress more effectively".into(),
        },
        WizardCommand::SetObjectives("Open my own illustration studio within two years".into()),
    ])
}

/// A client pointed at `base_url` with a short timeout.
pub fn client_for(base_url: &str, timeout: Duration) -> OpenAiCompatibleClient {
    let config = CompletionConfig {
        base_url: base_url.to_string(),
        timeout,
        ..CompletionConfig::default()
    };
    OpenAiCompatibleClient::new(&config)
}
