//! OpenAI-compatible chat-completion client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infrastructure::config::{ApiCredential, CompletionConfig};
use crate::infrastructure::ports::{
    CompletionPort, FinishReason, LlmError, LlmRequest, LlmResponse, MessageRole, TokenUsage,
};

/// Client for any endpoint speaking the OpenAI `/v1/chat/completions` API
#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    client: Client,
    completions_url: String,
    model: String,
}

impl OpenAiCompatibleClient {
    pub fn new(config: &CompletionConfig) -> Self {
        Self {
            client: build_client(config),
            completions_url: config.completions_url(),
            model: config.model.clone(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &CompletionConfig) -> Client {
    client_or_untimed(
        Client::builder().timeout(config.timeout).build(),
        config.timeout,
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn client_or_untimed(built: reqwest::Result<Client>, timeout: std::time::Duration) -> Client {
    built.unwrap_or_else(|e| {
        tracing::warn!(
            error = %e,
            timeout_secs = timeout.as_secs(),
            "HTTP client builder failed, requests will run without a timeout"
        );
        Client::new()
    })
}

// The browser fetch API has no client-level timeout
#[cfg(target_arch = "wasm32")]
fn build_client(_config: &CompletionConfig) -> Client {
    Client::new()
}

#[async_trait(?Send)]
impl CompletionPort for OpenAiCompatibleClient {
    async fn complete(
        &self,
        request: LlmRequest,
        credential: &ApiCredential,
    ) -> Result<LlmResponse, LlmError> {
        let api_request = build_request(&self.model, &request);

        tracing::debug!(
            url = %self.completions_url,
            model = %self.model,
            max_tokens = api_request.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.completions_url)
            .header("Authorization", format!("Bearer {}", credential.expose()))
            .json(&api_request)
            .send()
            .await
            .map_err(LlmError::request_failed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(LlmError::request_failed)?;
            return Err(LlmError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let api_response: OpenAIChatResponse = response
            .json()
            .await
            .map_err(LlmError::invalid_response)?;

        convert_response(api_response)
    }
}

fn build_request(model: &str, request: &LlmRequest) -> OpenAIChatRequest {
    let mut messages = Vec::with_capacity(request.messages.len() + 1);

    if let Some(system) = &request.system_prompt {
        messages.push(OpenAIMessage {
            role: MessageRole::System.as_str().to_string(),
            content: Some(system.clone()),
        });
    }

    for msg in &request.messages {
        messages.push(OpenAIMessage {
            role: msg.role.as_str().to_string(),
            content: Some(msg.content.clone()),
        });
    }

    let sampling = request.sampling;
    OpenAIChatRequest {
        model: model.to_string(),
        messages,
        temperature: sampling.temperature,
        max_tokens: sampling.max_tokens,
        top_p: sampling.top_p,
        frequency_penalty: sampling.frequency_penalty,
        presence_penalty: sampling.presence_penalty,
        stream: false,
    }
}

fn convert_response(response: OpenAIChatResponse) -> Result<LlmResponse, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::invalid_response("No choices in LLM response"))?;

    let content = choice.message.content.unwrap_or_default();
    if content.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("stop") | None => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        Some(_) => FinishReason::Unknown,
    };

    Ok(LlmResponse {
        content,
        finish_reason,
        usage: response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }),
    })
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    stream: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize, Default)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::ChatMessage;
    use crate::test_fixtures::{client_for, completion_body, StubEndpoint};
    use axum::http::StatusCode;
    use std::time::Duration;

    fn request() -> LlmRequest {
        LlmRequest::new(vec![ChatMessage::user("Plan please")]).with_system_prompt("You are a coach")
    }

    fn credential() -> ApiCredential {
        ApiCredential::new("sk-test").unwrap()
    }

    #[tokio::test]
    async fn test_success_sends_expected_wire_shape() {
        let stub = StubEndpoint::start(StatusCode::OK, completion_body("Plan: walk daily")).await;
        let client = client_for(&stub.base_url, Duration::from_secs(5));

        let response = client.complete(request(), &credential()).await.unwrap();
        assert_eq!(response.content, "Plan: walk daily");
        assert_eq!(response.finish_reason, FinishReason::Stop);
        assert_eq!(response.usage.unwrap().total_tokens, 168);

        let captured = stub.captured();
        assert_eq!(captured.hits, 1);
        assert_eq!(captured.authorization.as_deref(), Some("Bearer sk-test"));
        let body = captured.body.unwrap();
        assert_eq!(body["model"], "deepseek-chat");
        assert_eq!(body["stream"], false);
        assert_eq!(body["max_tokens"], 4000);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are a coach");
        assert_eq!(body["messages"][1]["role"], "user");
        let temperature = body["temperature"].as_f64().unwrap();
        assert!((temperature - 0.3).abs() < 1e-6);
        let top_p = body["top_p"].as_f64().unwrap();
        assert!((top_p - 0.9).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let stub = StubEndpoint::start(StatusCode::INTERNAL_SERVER_ERROR, "upstream down").await;
        let client = client_for(&stub.base_url, Duration::from_secs(5));

        let err = client.complete(request(), &credential()).await.unwrap_err();
        match err {
            LlmError::HttpStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let stub = StubEndpoint::start(StatusCode::OK, "{not json").await;
        let client = client_for(&stub.base_url, Duration::from_secs(5));

        let err = client.complete(request(), &credential()).await.unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_blank_content_is_empty() {
        let stub = StubEndpoint::start(StatusCode::OK, completion_body("   ")).await;
        let client = client_for(&stub.base_url, Duration::from_secs(5));

        let err = client.complete(request(), &credential()).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_timeout_is_request_failure() {
        let stub = StubEndpoint::start_delayed(
            StatusCode::OK,
            completion_body("late"),
            Duration::from_secs(3),
        )
        .await;
        let client = client_for(&stub.base_url, Duration::from_millis(200));

        let err = client.complete(request(), &credential()).await.unwrap_err();
        assert!(matches!(err, LlmError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_failure() {
        // Nothing listens on the discard port
        let client = client_for("http://127.0.0.1:9", Duration::from_secs(2));
        let err = client.complete(request(), &credential()).await.unwrap_err();
        assert!(matches!(err, LlmError::RequestFailed(_)));
    }

    #[test]
    fn test_no_choices_is_invalid() {
        let response = OpenAIChatResponse {
            choices: vec![],
            usage: None,
        };
        assert!(matches!(
            convert_response(response),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_unknown_finish_reason() {
        let response = OpenAIChatResponse {
            choices: vec![OpenAIChoice {
                message: OpenAIMessage {
                    role: "assistant".into(),
                    content: Some("ok".into()),
                },
                finish_reason: Some("insufficient_system_resource".into()),
            }],
            usage: None,
        };
        assert_eq!(
            convert_response(response).unwrap().finish_reason,
            FinishReason::Unknown
        );
    }

    #[test]
    fn test_length_finish_reason_keeps_usage() {
        let response = OpenAIChatResponse {
            choices: vec![OpenAIChoice {
                message: OpenAIMessage {
                    role: "assistant".into(),
                    content: Some("# Plan\n## 1.".into()),
                },
                finish_reason: Some("length".into()),
            }],
            usage: Some(OpenAIUsage {
                prompt_tokens: 900,
                completion_tokens: 4000,
                total_tokens: 4900,
            }),
        };
        let converted = convert_response(response).unwrap();
        assert_eq!(converted.finish_reason, FinishReason::Length);
        assert_eq!(converted.usage.unwrap().completion_tokens, 4000);
    }

    #[tokio::test]
    async fn test_builder_failure_still_yields_working_client() {
        let builder_error = Client::new().get("not a url").build().unwrap_err();
        let client = client_or_untimed(Err(builder_error), Duration::from_secs(5));

        let stub = StubEndpoint::start(StatusCode::OK, completion_body("still here")).await;
        let response = client
            .post(format!("{}/v1/chat/completions", stub.base_url))
            .json(&serde_json::json!({}))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(stub.captured().hits, 1);
    }
}
