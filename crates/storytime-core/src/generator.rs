//! # Story Generator Trait
//!
//! Seam between the HTTP handler and the text-generation provider.
//! The API crate only ever talks to a `BoxedStoryGenerator`; tests swap in
//! canned implementations.

use crate::error::StoryResult;
use crate::prompt::StoryPrompt;
use async_trait::async_trait;
use std::sync::Arc;

/// A provider that turns a prompt into story text.
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// Generate a story.
    ///
    /// Makes exactly one upstream attempt. Returns the trimmed, non-empty
    /// story text, or the error that ends the request.
    async fn generate(&self, prompt: &StoryPrompt) -> StoryResult<String>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared story generator (dynamic dispatch)
pub type BoxedStoryGenerator = Arc<dyn StoryGenerator>;
