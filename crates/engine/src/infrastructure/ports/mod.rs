//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - LLM calls (any OpenAI-compatible chat-completion endpoint)
//! - Clock (for testing)

mod error;
mod external;
mod testing;

pub use error::LlmError;
pub use external::{
    ChatMessage, CompletionPort, FinishReason, LlmRequest, LlmResponse, MessageRole,
    SamplingParams, TokenUsage,
};
pub use testing::ClockPort;

#[cfg(test)]
pub use external::MockCompletionPort;
