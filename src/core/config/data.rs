use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::config::io::ConfigError;

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Model identifier, e.g. "gemini-1.5-flash"
    pub model: Option<String>,
    /// API root the model path is appended to
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
    /// How many prior turns accompany each chat request (unset = all)
    pub max_context_messages: Option<usize>,
}

/// Keys accepted by `flashchat set` / `flashchat unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Model,
    BaseUrl,
    Temperature,
    MaxOutputTokens,
    TopP,
    TopK,
    MaxContextMessages,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 7] = [
        ConfigKey::Model,
        ConfigKey::BaseUrl,
        ConfigKey::Temperature,
        ConfigKey::MaxOutputTokens,
        ConfigKey::TopP,
        ConfigKey::TopK,
        ConfigKey::MaxContextMessages,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Model => "model",
            ConfigKey::BaseUrl => "base-url",
            ConfigKey::Temperature => "temperature",
            ConfigKey::MaxOutputTokens => "max-output-tokens",
            ConfigKey::TopP => "top-p",
            ConfigKey::TopK => "top-k",
            ConfigKey::MaxContextMessages => "max-context-messages",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace('_', "-");
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownKey(value.to_string()))
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

fn parse_number<T: FromStr>(key: ConfigKey, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::invalid(key, value, "expected a number"))
}

fn parse_in_range(key: ConfigKey, value: &str, min: f32, max: f32) -> Result<f32, ConfigError> {
    let parsed: f32 = parse_number(key, value)?;
    if !(min..=max).contains(&parsed) {
        return Err(ConfigError::invalid(
            key,
            value,
            &format!("expected a value between {min} and {max}"),
        ));
    }
    Ok(parsed)
}

fn parse_positive<T>(key: ConfigKey, value: &str) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    let parsed: T = parse_number(key, value)?;
    if parsed <= T::default() {
        return Err(ConfigError::invalid(key, value, "expected a positive integer"));
    }
    Ok(parsed)
}

impl Config {
    pub fn set_value(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::invalid(key, value, "value must not be empty"));
        }

        match key {
            ConfigKey::Model => self.model = Some(trimmed.to_string()),
            ConfigKey::BaseUrl => {
                if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                    return Err(ConfigError::invalid(
                        key,
                        value,
                        "expected an http:// or https:// URL",
                    ));
                }
                self.base_url = Some(trimmed.to_string());
            }
            ConfigKey::Temperature => {
                self.temperature = Some(parse_in_range(key, trimmed, 0.0, 2.0)?)
            }
            ConfigKey::MaxOutputTokens => {
                self.max_output_tokens = Some(parse_positive(key, trimmed)?)
            }
            ConfigKey::TopP => self.top_p = Some(parse_in_range(key, trimmed, 0.0, 1.0)?),
            ConfigKey::TopK => self.top_k = Some(parse_positive(key, trimmed)?),
            ConfigKey::MaxContextMessages => {
                self.max_context_messages = Some(parse_positive(key, trimmed)?)
            }
        }
        Ok(())
    }

    pub fn unset_value(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::Model => self.model = None,
            ConfigKey::BaseUrl => self.base_url = None,
            ConfigKey::Temperature => self.temperature = None,
            ConfigKey::MaxOutputTokens => self.max_output_tokens = None,
            ConfigKey::TopP => self.top_p = None,
            ConfigKey::TopK => self.top_k = None,
            ConfigKey::MaxContextMessages => self.max_context_messages = None,
        }
    }
}
