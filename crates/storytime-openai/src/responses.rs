//! # OpenAI Responses Generator
//!
//! Implementation of `StoryGenerator` over the OpenAI Responses API.
//! One POST per story, no retries.

use crate::config::OpenAiConfig;
use crate::extract::{extract_error_message, extract_output_text};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use storytime_core::{StoryError, StoryGenerator, StoryPrompt, StoryResult};
use tracing::{error, info, instrument};

/// Story generator backed by `POST /v1/responses`
pub struct OpenAiStoryGenerator {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiStoryGenerator {
    /// Create a new generator
    pub fn new(config: OpenAiConfig) -> StoryResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("storytime/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StoryError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> StoryResult<Self> {
        let config = OpenAiConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Build the request payload for a prompt
    fn build_request<'a>(&'a self, prompt: &'a StoryPrompt) -> ResponsesRequest<'a> {
        ResponsesRequest {
            model: &self.config.model,
            input: [
                InputMessage {
                    role: "system",
                    content: &prompt.system,
                },
                InputMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_output_tokens: prompt.max_output_tokens,
        }
    }
}

#[async_trait]
impl StoryGenerator for OpenAiStoryGenerator {
    #[instrument(skip(self, prompt), fields(model = %self.config.model, max_output_tokens = prompt.max_output_tokens))]
    async fn generate(&self, prompt: &StoryPrompt) -> StoryResult<String> {
        let request = self.build_request(prompt);

        let response = self
            .client
            .post(self.config.responses_url())
            .header("Authorization", self.config.auth_header())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI request failed to send: {}", e);
                StoryError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoryError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("OpenAI API error: status={}, body={}", status, body);

            let data = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
            return Err(StoryError::Upstream(extract_error_message(&data)));
        }

        let data: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            StoryError::Internal(format!("Failed to parse OpenAI response: {}", e))
        })?;

        let story = extract_output_text(&data);
        if story.is_empty() {
            error!("OpenAI response carried no output text");
            return Err(StoryError::EmptyStory);
        }

        info!("Generated story ({} chars)", story.chars().count());

        Ok(story)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

// =============================================================================
// OpenAI API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: [InputMessage<'a>; 2],
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct InputMessage<'a> {
    role: &'static str,
    content: &'a str,
}
