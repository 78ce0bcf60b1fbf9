//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default chat-completion endpoint (OpenRouter).
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// Default model requested from the endpoint.
pub const DEFAULT_MODEL: &str = "qwen/qwen3-235b-a22b:free";

/// Assistant configuration.
///
/// The API key is the only required setting; everything else has a default
/// and can be overridden via `TALENTSCOUT_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Chat-completion endpoint URL.
    pub api_url: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Bearer credential for the endpoint. Never logged.
    pub api_key: SecretString,
    /// `HTTP-Referer` identifying header.
    pub referer: String,
    /// `X-Title` identifying header.
    pub title: String,
    /// Per-attempt request timeout.
    pub request_timeout: Duration,
    /// Maximum attempts for the remote call.
    pub max_attempts: u32,
    /// Flat delay between attempts.
    pub retry_delay: Duration,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Requires `OPENROUTER_API_KEY`; the secret must come from the
    /// environment, never from source.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let mut config = Self::with_key(SecretString::from(api_key));
        if let Ok(url) = std::env::var("TALENTSCOUT_API_URL") {
            config.api_url = url;
        }
        if let Ok(model) = std::env::var("TALENTSCOUT_MODEL") {
            config.model = model;
        }
        if let Ok(referer) = std::env::var("TALENTSCOUT_REFERER") {
            config.referer = referer;
        }
        Ok(config)
    }

    /// Build a config with defaults and the given key.
    pub fn with_key(api_key: SecretString) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key,
            referer: "https://talentscout.com".to_string(),
            title: "TalentScout Hiring Assistant".to_string(),
            request_timeout: Duration::from_secs(10),
            max_attempts: 3,
            retry_delay: Duration::from_secs(1),
        }
    }
}
