use thiserror::Error;

use crate::api::ClientSettings;
use crate::core::config::Config;
use crate::core::constants::{API_KEY_ENV, BASE_URL_ENV, MODEL_ENV, PLACEHOLDER_API_KEY};

const QUICK_FIXES: &[&str] = &[
    "export GEMINI_API_KEY=your-key   # Set the API key for this shell",
    "flashchat config                 # Show the resolved configuration",
];

#[derive(Debug, Error)]
#[error("{message}")]
pub struct CredentialError {
    message: String,
    quick_fixes: &'static [&'static str],
    exit_code: i32,
}

impl CredentialError {
    pub fn missing_api_key() -> Self {
        Self::new(
            format!(
                "❌ {API_KEY_ENV} environment variable not set\n\nPlease set your API key:\n   export {API_KEY_ENV}=\"your-api-key-here\""
            ),
            QUICK_FIXES,
            2,
        )
    }

    pub fn placeholder_api_key() -> Self {
        Self::new(
            format!(
                "❌ Please set your actual API key!\n\n{API_KEY_ENV} still holds the placeholder value '{PLACEHOLDER_API_KEY}'."
            ),
            QUICK_FIXES,
            2,
        )
    }

    fn new(
        message: impl Into<String>,
        quick_fixes: &'static [&'static str],
        exit_code: i32,
    ) -> Self {
        Self {
            message: message.into(),
            quick_fixes,
            exit_code,
        }
    }

    pub fn quick_fixes(&self) -> &'static [&'static str] {
        self.quick_fixes
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

/// Rejects keys that cannot possibly authenticate, so no request is made
/// with them.
pub fn validate_api_key(api_key: &str) -> Result<(), CredentialError> {
    let trimmed = api_key.trim();
    if trimmed.is_empty() {
        return Err(CredentialError::missing_api_key());
    }
    if trimmed == PLACEHOLDER_API_KEY {
        return Err(CredentialError::placeholder_api_key());
    }
    Ok(())
}

/// Explicit overrides from the command line.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub model: Option<String>,
    pub base_url: Option<String>,
}

/// Resolves endpoint, model and key. Precedence for model and base URL is
/// command line, then environment, then config file, then built-in default.
/// The key only ever comes from the environment.
pub fn resolve_client_settings<F>(
    config: &Config,
    overrides: &SettingsOverrides,
    lookup: F,
) -> Result<ClientSettings, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = lookup(API_KEY_ENV)
        .map(|key| key.trim().to_string())
        .unwrap_or_default();
    validate_api_key(&api_key)?;

    let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

    let model = non_empty(overrides.model.clone())
        .or_else(|| non_empty(lookup(MODEL_ENV)))
        .unwrap_or_else(|| config.model().to_string());
    let base_url = non_empty(overrides.base_url.clone())
        .or_else(|| non_empty(lookup(BASE_URL_ENV)))
        .unwrap_or_else(|| config.base_url().to_string());

    Ok(ClientSettings {
        base_url,
        model,
        api_key,
    })
}

pub fn resolve_env_client_settings(
    config: &Config,
    overrides: &SettingsOverrides,
) -> Result<ClientSettings, CredentialError> {
    resolve_client_settings(config, overrides, |name| std::env::var(name).ok())
}
