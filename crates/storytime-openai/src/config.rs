//! # OpenAI Configuration
//!
//! Configuration management for the OpenAI integration.
//! The API key is loaded from the environment and never logged.

use std::env;
use std::fmt;
use storytime_core::StoryError;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI API configuration
#[derive(Clone)]
pub struct OpenAiConfig {
    /// Secret API key
    pub api_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Model identifier sent with every request
    pub model: String,
}

impl OpenAiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `OPENAI_API_KEY` (non-empty)
    ///
    /// Optional:
    /// - `OPENAI_BASE_URL`
    /// - `OPENAI_MODEL`
    pub fn from_env() -> Result<Self, StoryError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| StoryError::Configuration(missing_key_message()))?;

        let api_base_url = env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let model = env::var("OPENAI_MODEL")
            .ok()
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            api_base_url,
            model,
        })
    }

    /// Create config with an explicit key and default endpoint/model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Full URL of the Responses endpoint
    pub fn responses_url(&self) -> String {
        format!("{}/v1/responses", self.api_base_url.trim_end_matches('/'))
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Message returned to callers when the key is not configured
pub fn missing_key_message() -> String {
    format!("Missing {} in server environment variables.", API_KEY_ENV)
}
