//! In-process stand-in for an OpenAI-compatible completion endpoint.
//!
//! Serves one canned reply on `/v1/chat/completions` and records the last
//! request so tests can assert on the wire format.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;

/// What the stub saw on its most recent request.
#[derive(Debug, Default, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
    pub hits: usize,
}

/// A running stub server. The server task lives until the test runtime ends.
pub struct StubEndpoint {
    pub base_url: String,
    captured: Arc<Mutex<CapturedRequest>>,
}

impl StubEndpoint {
    /// Reply with `status` and `body` immediately.
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        Self::start_delayed(status, body, Duration::ZERO).await
    }

    /// Reply with `status` and `body` after `delay`.
    pub async fn start_delayed(status: StatusCode, body: impl Into<String>, delay: Duration) -> Self {
        let captured = Arc::new(Mutex::new(CapturedRequest::default()));
        let sink = Arc::clone(&captured);
        let reply: Arc<str> = Arc::from(body.into());

        let app = Router::new().route(
            "/v1/chat/completions",
            post(move |headers: HeaderMap, request_body: String| {
                let sink = Arc::clone(&sink);
                let reply = Arc::clone(&reply);
                async move {
                    {
                        let mut captured = sink.lock().unwrap();
                        captured.hits += 1;
                        captured.authorization = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        captured.body = serde_json::from_str(&request_body).ok();
                    }
                    tokio::time::sleep(delay).await;
                    (status, reply.to_string())
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            captured,
        }
    }

    pub fn captured(&self) -> CapturedRequest {
        self.captured.lock().unwrap().clone()
    }
}

/// A successful chat-completion body whose first choice carries `content`.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 120, "completion_tokens": 48, "total_tokens": 168}
    })
    .to_string()
}
