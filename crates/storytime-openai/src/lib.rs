//! # storytime-openai
//!
//! OpenAI story generator for storytime-rs.
//!
//! `OpenAiStoryGenerator` implements `StoryGenerator` on top of the
//! Responses API:
//!
//! - one `POST /v1/responses` per story, bearer-authenticated
//! - system + user messages, token budget from the story length
//! - tolerant extraction of `output_text` blocks from the envelope
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storytime_core::{StoryGenerator, StoryOptions, StoryPrompt};
//! use storytime_openai::OpenAiStoryGenerator;
//!
//! // Create generator from environment (OPENAI_API_KEY)
//! let generator = OpenAiStoryGenerator::from_env()?;
//!
//! let prompt = StoryPrompt::build(&StoryOptions::default());
//! let story = generator.generate(&prompt).await?;
//! ```

pub mod config;
pub mod extract;
pub mod responses;

// Re-exports
pub use config::{missing_key_message, OpenAiConfig, API_KEY_ENV};
pub use extract::{extract_error_message, extract_output_text};
pub use responses::OpenAiStoryGenerator;
