//! Error types for port operations.

/// Completion endpoint failures.
///
/// None of these reach the UI: the plan service logs them and falls back to
/// the local synthesizer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("No API credential configured")]
    MissingCredential,

    /// Transport failure (DNS, connect, TLS, timeout)
    #[error("LLM request failed: {0}")]
    RequestFailed(String),

    #[error("LLM endpoint returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("LLM response contained no content")]
    EmptyContent,
}

impl LlmError {
    /// Create a RequestFailed error.
    pub fn request_failed(message: impl ToString) -> Self {
        Self::RequestFailed(message.to_string())
    }

    /// Create an InvalidResponse error.
    pub fn invalid_response(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }

    /// Short machine-readable tag for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::RequestFailed(_) => "request_failed",
            Self::HttpStatus { .. } => "http_status",
            Self::InvalidResponse(_) => "invalid_response",
            Self::EmptyContent => "empty_content",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display() {
        let err = LlmError::HttpStatus {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "LLM endpoint returned HTTP 500: boom");
        assert_eq!(err.kind(), "http_status");
    }
}
