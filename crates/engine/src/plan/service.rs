//! Plan generation service: one remote attempt, local fallback on any failure

use std::sync::Arc;

use chrono::{DateTime, Utc};
use growthwise_domain::{Language, WizardState};
use serde::{Deserialize, Serialize};

use super::fallback::synthesize_local_plan;
use super::prompt::{build_prompt, PromptBundle};
use crate::infrastructure::config::ApiCredential;
use crate::infrastructure::ports::{
    ChatMessage, ClockPort, CompletionPort, FinishReason, LlmError, LlmRequest, LlmResponse,
    SamplingParams,
};

/// Where a plan's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    Remote,
    Fallback,
}

/// The result of one submission. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub content: String,
    pub language: Language,
    pub source: PlanSource,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedPlan {
    pub fn is_fallback(&self) -> bool {
        self.source == PlanSource::Fallback
    }
}

/// Inputs for one generation.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub state: Arc<WizardState>,
    pub language: Language,
}

impl PlanRequest {
    pub fn new(state: Arc<WizardState>, language: Language) -> Self {
        Self { state, language }
    }
}

/// Turns a completed questionnaire into a [`GeneratedPlan`].
#[derive(Clone)]
pub struct PlanGenerationService {
    completion: Arc<dyn CompletionPort>,
    clock: Arc<dyn ClockPort>,
    sampling: SamplingParams,
}

impl PlanGenerationService {
    pub fn new(completion: Arc<dyn CompletionPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            completion,
            clock,
            sampling: SamplingParams::default(),
        }
    }

    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    /// Generate a plan. Never fails: every error path ends in the local
    /// synthesizer with `source = Fallback`.
    pub async fn generate(
        &self,
        request: &PlanRequest,
        credential: Option<&ApiCredential>,
    ) -> GeneratedPlan {
        let language = request.language;

        let (content, source) = match self.try_remote(request, credential).await {
            Ok(content) => {
                tracing::info!(
                    language = %language,
                    chars = content.chars().count(),
                    "Generated plan from completion endpoint"
                );
                (content, PlanSource::Remote)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    kind = e.kind(),
                    language = %language,
                    "Plan generation failed, using local fallback"
                );
                (
                    synthesize_local_plan(&request.state, language),
                    PlanSource::Fallback,
                )
            }
        };

        GeneratedPlan {
            content,
            language,
            source,
            generated_at: self.clock.now(),
        }
    }

    async fn try_remote(
        &self,
        request: &PlanRequest,
        credential: Option<&ApiCredential>,
    ) -> Result<String, LlmError> {
        let credential = credential.ok_or(LlmError::MissingCredential)?;

        let PromptBundle {
            system_instruction,
            user_prompt,
        } = build_prompt(&request.state, request.language).map_err(|e| {
            tracing::error!(error = %e, "Plan requested for an incomplete questionnaire");
            LlmError::invalid_response(format!("prompt not built: {}", e))
        })?;

        let llm_request = LlmRequest::new(vec![ChatMessage::user(user_prompt)])
            .with_system_prompt(system_instruction)
            .with_sampling(self.sampling);

        let response = self.completion.complete(llm_request, credential).await?;
        log_finish(&response);
        let content = response.content.trim();
        if content.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(content.to_string())
    }
}

/// A plan cut off at the token limit is still used, but the log says so.
fn log_finish(response: &LlmResponse) {
    let usage = response.usage;
    let prompt_tokens = usage.map(|u| u.prompt_tokens);
    let completion_tokens = usage.map(|u| u.completion_tokens);
    let total_tokens = usage.map(|u| u.total_tokens);
    match response.finish_reason {
        FinishReason::Stop => tracing::debug!(
            ?prompt_tokens,
            ?completion_tokens,
            ?total_tokens,
            "Completion finished"
        ),
        FinishReason::Length => tracing::warn!(
            ?prompt_tokens,
            ?completion_tokens,
            ?total_tokens,
            "Completion hit the token limit, plan may be truncated"
        ),
        reason => tracing::warn!(?reason, ?total_tokens, "Completion stopped early"),
    }
}
