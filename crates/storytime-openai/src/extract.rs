//! # Response Extraction
//!
//! Tolerant readers over the Responses API envelope. Any missing or
//! wrongly-typed level contributes nothing instead of failing.
//!
//! ```text
//! { "output": [ { "content": [ { "type": "output_text", "text": "..." } ] } ] }
//! ```

use serde_json::Value;

/// Content block type that carries generated text
pub const OUTPUT_TEXT_TYPE: &str = "output_text";

/// Fallback when an error body carries no message
pub const GENERIC_UPSTREAM_ERROR: &str = "OpenAI request failed.";

/// Concatenate every `output_text` block across all output items, in
/// order, then trim.
pub fn extract_output_text(data: &Value) -> String {
    let text: String = data
        .get("output")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.get("content").and_then(Value::as_array))
        .flatten()
        .filter(|block| block.get("type").and_then(Value::as_str) == Some(OUTPUT_TEXT_TYPE))
        .filter_map(|block| block.get("text").and_then(Value::as_str))
        .collect();

    text.trim().to_string()
}

/// Nested `error.message` of an error body, or the generic fallback
pub fn extract_error_message(data: &Value) -> String {
    data.get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(GENERIC_UPSTREAM_ERROR)
        .to_string()
}
