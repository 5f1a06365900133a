//! Service handles shared through Dioxus context

use std::sync::Arc;

use dioxus::prelude::*;
use growthwise_engine::{
    ApiCredential, CompletionConfig, OpenAiCompatibleClient, PlanGenerationService, SystemClock,
};

/// Startup settings from the composition root. `Send + Sync`, so it can be
/// handed to the launch builder.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub completion: CompletionConfig,
    /// Raw `GROWTHWISE_LANGUAGE`, if set
    pub language: Option<String>,
}

#[derive(Clone)]
pub struct Services {
    pub plan: PlanGenerationService,
    /// Key from the environment; preferred over the cached one
    pub env_credential: Option<ApiCredential>,
}

impl Services {
    pub fn from_config(config: &AppConfig) -> Self {
        let completion = &config.completion;
        tracing::info!(
            base_url = %completion.base_url,
            model = %completion.model,
            timeout_secs = completion.timeout.as_secs(),
            env_key = completion.api_key.is_some(),
            "Configured plan generation"
        );

        let client = OpenAiCompatibleClient::new(completion);
        let plan = PlanGenerationService::new(Arc::new(client), Arc::new(SystemClock))
            .with_sampling(completion.sampling);

        Self {
            plan,
            env_credential: completion.api_key.clone(),
        }
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}
