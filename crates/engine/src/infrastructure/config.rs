//! Completion endpoint configuration and the API credential.

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::infrastructure::ports::SamplingParams;

/// Default completion endpoint base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.deepseek.com";

/// Default model name.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Default client-side request timeout (native targets only).
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ENV_API_BASE_URL: &str = "GROWTHWISE_API_BASE_URL";
pub const ENV_MODEL: &str = "GROWTHWISE_MODEL";
pub const ENV_API_KEY: &str = "GROWTHWISE_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "GROWTHWISE_TIMEOUT_SECS";
pub const ENV_MAX_TOKENS: &str = "GROWTHWISE_MAX_TOKENS";

/// Bearer token for the completion endpoint. `Debug` never shows the value.
pub struct ApiCredential(SecretString);

impl ApiCredential {
    /// Returns `None` for a blank key.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(SecretString::from(trimmed.to_string())))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiCredential {
    fn clone(&self) -> Self {
        Self(SecretString::from(self.expose().to_string()))
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential([REDACTED])")
    }
}

/// Settings for [`crate::infrastructure::openai::OpenAiCompatibleClient`].
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Validated http(s) base, no trailing slash
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub sampling: SamplingParams,
    /// Key from the environment, if any. The player prefers it over a cached one.
    pub api_key: Option<ApiCredential>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            sampling: SamplingParams::default(),
            api_key: None,
        }
    }
}

impl CompletionConfig {
    /// Create config from `GROWTHWISE_*` environment variables.
    ///
    /// Unparseable values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_API_BASE_URL) {
            match parse_base_url(&raw) {
                Ok(url) => config.base_url = url,
                Err(e) => tracing::warn!(
                    var = ENV_API_BASE_URL,
                    value = %raw,
                    error = %e,
                    "Invalid base URL, using default"
                ),
            }
        }

        if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
            config.model = model.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(
                    var = ENV_TIMEOUT_SECS,
                    value = %raw,
                    default = DEFAULT_TIMEOUT_SECS,
                    "Invalid timeout, using default"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_MAX_TOKENS) {
            match raw.trim().parse::<u32>() {
                Ok(tokens) if tokens > 0 => config.sampling.max_tokens = tokens,
                _ => tracing::warn!(
                    var = ENV_MAX_TOKENS,
                    value = %raw,
                    default = config.sampling.max_tokens,
                    "Invalid max tokens, using default"
                ),
            }
        }

        config.api_key = lookup(ENV_API_KEY).and_then(ApiCredential::new);
        config
    }

    /// Full URL of the chat-completions route.
    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

/// Accepts only absolute http(s) URLs; returns the normalized base.
pub fn parse_base_url(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url.as_str().trim_end_matches('/').to_string()),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CompletionConfig::from_lookup(lookup(&[]));
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.sampling.max_tokens, 4000);
        assert!(config.api_key.is_none());
        assert_eq!(
            config.completions_url(),
            "https://api.deepseek.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_overrides_from_env() {
        let config = CompletionConfig::from_lookup(lookup(&[
            (ENV_API_BASE_URL, "http://127.0.0.1:9000/"),
            (ENV_MODEL, "gpt-4o-mini"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_MAX_TOKENS, "1200"),
            (ENV_API_KEY, "  sk-test  "),
        ]));
        assert_eq!(config.completions_url(), "http://127.0.0.1:9000/v1/chat/completions");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.sampling.max_tokens, 1200);
        assert_eq!(config.api_key.unwrap().expose(), "sk-test");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = CompletionConfig::from_lookup(lookup(&[
            (ENV_API_BASE_URL, "ftp://example.com"),
            (ENV_TIMEOUT_SECS, "soon"),
            (ENV_MAX_TOKENS, "0"),
            (ENV_API_KEY, "   "),
        ]));
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.sampling.max_tokens, 4000);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_parse_base_url_keeps_path() {
        assert_eq!(
            parse_base_url("https://proxy.example.com/openai/").unwrap(),
            "https://proxy.example.com/openai"
        );
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = ApiCredential::new("sk-secret").unwrap();
        assert!(!format!("{:?}", credential).contains("sk-secret"));
        assert_eq!(credential.clone().expose(), "sk-secret");
    }
}
