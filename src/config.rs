use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("API key must be provided via --api-key, GEMINI_API_KEY or API_KEY")]
    MissingApiKey,
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL; the request goes to `{api_url}/{model}:generateContent`.
    pub api_url: String,
    pub temperature: Option<f32>,
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn from_env(api_key: Option<String>, model: Option<String>) -> Result<Self, ConfigError> {
        Self::from_lookup(api_key, model, |key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(
        api_key: Option<String>,
        model: Option<String>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = api_key
            .or_else(|| lookup("GEMINI_API_KEY"))
            .or_else(|| lookup("API_KEY"))
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = model
            .or_else(|| lookup("GEMINI_MODEL"))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_url = lookup("GEMINI_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // Left unset unless configured so the service default applies
        let temperature = lookup("GEMINI_TEMPERATURE").and_then(|t| t.parse().ok());

        let timeout = lookup("GEMINI_TIMEOUT_SECS")
            .and_then(|t| t.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            api_key,
            model,
            api_url,
            temperature,
            timeout,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.api_url, self.model)
    }
}
