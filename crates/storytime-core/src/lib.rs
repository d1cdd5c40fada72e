//! # storytime-core
//!
//! Core types and traits for storytime.
//!
//! This crate provides:
//! - `CheckoutStrategy` with hosted-placeholder and local-cart variants
//! - `Cart` and `CartLineItem`, persisted through a `KeyValueStore`
//! - `StoryRequest` parsing and normalization into `StoryOptions`
//! - `StoryPrompt` construction
//! - `StoryGenerator` trait for text-generation providers
//! - `StoryError` and `CartError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use storytime_core::{StoryPrompt, StoryRequest};
//!
//! let request = StoryRequest::from_body(br#"{"kidName":"Mia","length":"short"}"#)?;
//! let prompt = StoryPrompt::build(&request.normalize());
//!
//! let story = generator.generate(&prompt).await?;
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod storage;
pub mod story;

// Re-exports for convenience
pub use cart::{Cart, CartLineItem, CART_STORAGE_KEY};
pub use checkout::{
    confirmation_url, select_strategy, CheckoutConfig, CheckoutOutcome, CheckoutStrategy,
    HostedPlaceholderCheckout, LocalCartCheckout, CONFIRMATION_PATH, HOSTED_PLACEHOLDER_NOTICE,
};
pub use error::{CartError, CartResult, StoryError, StoryResult, GENERIC_SERVER_ERROR};
pub use generator::{BoxedStoryGenerator, StoryGenerator};
pub use prompt::StoryPrompt;
pub use storage::{KeyValueStore, MemoryStore};
pub use story::{StoryLength, StoryOptions, StoryRequest};
