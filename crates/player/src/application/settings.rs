//! The two persisted settings: API credential and UI language

use growthwise_domain::Language;
use growthwise_engine::ApiCredential;

use crate::ports::outbound::{storage_keys, PlatformPort};

/// Credential for a new questionnaire session: the environment key wins
/// over one cached on the device.
pub fn resolve_credential(
    env_key: Option<&ApiCredential>,
    platform: &dyn PlatformPort,
) -> Option<ApiCredential> {
    if let Some(key) = env_key {
        return Some(key.clone());
    }
    platform
        .storage_load(storage_keys::API_KEY)
        .and_then(ApiCredential::new)
}

/// Cache a key on the device. Returns false (and stores nothing) for blank input.
pub fn store_credential(platform: &dyn PlatformPort, raw: &str) -> bool {
    match ApiCredential::new(raw) {
        Some(key) => {
            platform.storage_save(storage_keys::API_KEY, key.expose());
            tracing::info!("Cached API key");
            true
        }
        None => false,
    }
}

pub fn clear_credential(platform: &dyn PlatformPort) {
    platform.storage_remove(storage_keys::API_KEY);
    tracing::info!("Removed cached API key");
}

pub fn has_stored_credential(platform: &dyn PlatformPort) -> bool {
    platform
        .storage_load(storage_keys::API_KEY)
        .and_then(ApiCredential::new)
        .is_some()
}

/// Language at startup: `GROWTHWISE_LANGUAGE`, then the cached choice, then English.
pub fn startup_language(env_value: Option<&str>, platform: &dyn PlatformPort) -> Language {
    if let Some(raw) = env_value {
        match raw.parse::<Language>() {
            Ok(language) => return language,
            Err(e) => tracing::warn!(error = %e, "Ignoring GROWTHWISE_LANGUAGE"),
        }
    }

    platform
        .storage_load(storage_keys::LANGUAGE)
        .and_then(|code| code.parse().ok())
        .unwrap_or_default()
}

pub fn persist_language(platform: &dyn PlatformPort, language: Language) {
    platform.storage_save(storage_keys::LANGUAGE, language.code());
}
