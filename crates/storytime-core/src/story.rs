//! # Story Requests
//!
//! Parsing and normalization of the bedtime-story request body.
//!
//! Fields arrive as loose JSON. Falsy values (`null`, `false`, `0`, `""`)
//! take the field default; other scalars are stringified and then cut to
//! the field's maximum length by character prefix.

use crate::error::{StoryError, StoryResult};
use serde::Deserialize;
use serde_json::Value;

pub const MAX_NAME_CHARS: usize = 40;
pub const MAX_TONE_CHARS: usize = 40;
pub const MAX_LENGTH_CHARS: usize = 20;
pub const MAX_SETTING_CHARS: usize = 120;
pub const MAX_FOCUS_CHARS: usize = 80;
pub const MAX_SUPPORTING_CHARS: usize = 60;

pub const DEFAULT_NAME: &str = "Hero";
pub const DEFAULT_TONE: &str = "soft and sleepy";
pub const DEFAULT_LENGTH: &str = "medium";

/// Raw request body as sent by the browser
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoryRequest {
    pub kid_name: Option<Value>,
    pub kid_age: Option<Value>,
    pub tone: Option<Value>,
    pub length: Option<Value>,
    pub setting: Option<Value>,
    pub focus: Option<Value>,
    pub supporting: Option<Value>,
    pub holiday_mode: Option<Value>,
}

impl StoryRequest {
    /// Parse a request body.
    ///
    /// An empty body, `null`, or any non-object JSON value yields a request
    /// with every field absent.
    pub fn from_body(body: &[u8]) -> StoryResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body).map_err(|_| StoryError::InvalidJson)?;
        Ok(Self::from_value(value))
    }

    /// Build from an already-parsed JSON value
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Apply defaults and length limits
    pub fn normalize(&self) -> StoryOptions {
        let length_tag = text_or(&self.length, DEFAULT_LENGTH, MAX_LENGTH_CHARS);

        StoryOptions {
            kid_name: text_or(&self.kid_name, DEFAULT_NAME, MAX_NAME_CHARS),
            kid_age: self.kid_age.as_ref().and_then(js_text),
            tone: text_or(&self.tone, DEFAULT_TONE, MAX_TONE_CHARS),
            length: StoryLength::from_tag(&length_tag),
            length_tag,
            setting: text_or(&self.setting, "", MAX_SETTING_CHARS),
            focus: text_or(&self.focus, "", MAX_FOCUS_CHARS),
            supporting: text_or(&self.supporting, "", MAX_SUPPORTING_CHARS),
            holiday_mode: self.holiday_mode.as_ref().is_some_and(is_truthy),
        }
    }
}

/// Normalized, length-limited story options
#[derive(Debug, Clone, PartialEq)]
pub struct StoryOptions {
    pub kid_name: String,
    /// Age as text, present only when truthy
    pub kid_age: Option<String>,
    pub tone: String,
    /// Truncated length tag as supplied
    pub length_tag: String,
    pub length: StoryLength,
    /// Empty when not provided
    pub setting: String,
    /// Empty when not provided
    pub focus: String,
    /// Empty when not provided
    pub supporting: String,
    pub holiday_mode: bool,
}

impl Default for StoryOptions {
    fn default() -> Self {
        StoryRequest::default().normalize()
    }
}

/// Target story length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryLength {
    Short,
    Medium,
    Long,
}

impl StoryLength {
    /// Map a length tag. Anything unrecognised is `Medium`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "short" => StoryLength::Short,
            "long" => StoryLength::Long,
            _ => StoryLength::Medium,
        }
    }

    /// Read-aloud duration in minutes, as shown in the prompt
    pub fn reading_minutes(&self) -> &'static str {
        match self {
            StoryLength::Short => "3–5",
            StoryLength::Medium => "7–10",
            StoryLength::Long => "10–15",
        }
    }

    /// Output token budget sent to the model
    pub fn max_output_tokens(&self) -> u32 {
        match self {
            StoryLength::Short => 700,
            StoryLength::Medium => 1200,
            StoryLength::Long => 1800,
        }
    }
}

/// Literal character prefix of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn text_or(value: &Option<Value>, default: &str, max_chars: usize) -> String {
    let text = value
        .as_ref()
        .and_then(js_text)
        .unwrap_or_else(|| default.to_string());
    truncate_chars(&text, max_chars)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a truthy value, `None` for falsy values
fn js_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        other => Some(other.to_string()),
    }
}

/// Shortest decimal form, so whole floats print without a fraction (`5.0` as `5`)
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_length_mapping() {
        assert_eq!(StoryLength::from_tag("short").reading_minutes(), "3–5");
        assert_eq!(StoryLength::from_tag("short").max_output_tokens(), 700);
        assert_eq!(StoryLength::from_tag("long").reading_minutes(), "10–15");
        assert_eq!(StoryLength::from_tag("long").max_output_tokens(), 1800);

        for tag in ["medium", "", "SHORT", "epic", "long "] {
            let length = StoryLength::from_tag(tag);
            assert_eq!(length.reading_minutes(), "7–10", "tag {:?}", tag);
            assert_eq!(length.max_output_tokens(), 1200, "tag {:?}", tag);
        }
    }

    #[test]
    fn test_empty_body_takes_defaults() {
        let opts = StoryRequest::from_body(b"").unwrap().normalize();
        assert_eq!(opts.kid_name, "Hero");
        assert_eq!(opts.tone, "soft and sleepy");
        assert_eq!(opts.length_tag, "medium");
        assert_eq!(opts.length, StoryLength::Medium);
        assert_eq!(opts.kid_age, None);
        assert!(opts.setting.is_empty());
        assert!(opts.focus.is_empty());
        assert!(opts.supporting.is_empty());
        assert!(!opts.holiday_mode);
        assert_eq!(opts, StoryOptions::default());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = StoryRequest::from_body(b"{kidName: nope").unwrap_err();
        assert!(matches!(err, StoryError::InvalidJson));
    }

    #[test]
    fn test_non_object_bodies_take_defaults() {
        for body in [&b"null"[..], &b"42"[..], &b"[1,2]"[..], &b"\"hi\""[..]] {
            let opts = StoryRequest::from_body(body).unwrap().normalize();
            assert_eq!(opts, StoryOptions::default());
        }
    }

    #[test]
    fn test_falsy_values_take_defaults() {
        let req = StoryRequest::from_value(json!({
            "kidName": "",
            "kidAge": 0,
            "tone": null,
            "length": false,
            "setting": "",
            "holidayMode": 0
        }));
        let opts = req.normalize();
        assert_eq!(opts.kid_name, "Hero");
        assert_eq!(opts.kid_age, None);
        assert_eq!(opts.tone, "soft and sleepy");
        assert_eq!(opts.length_tag, "medium");
        assert!(opts.setting.is_empty());
        assert!(!opts.holiday_mode);
    }

    #[test]
    fn test_scalars_are_stringified() {
        let req = StoryRequest::from_value(json!({
            "kidName": 7,
            "kidAge": 5,
            "holidayMode": "yes"
        }));
        let opts = req.normalize();
        assert_eq!(opts.kid_name, "7");
        assert_eq!(opts.kid_age.as_deref(), Some("5"));
        assert!(opts.holiday_mode);
    }

    #[test]
    fn test_float_numbers_stringify_like_text() {
        let opts = StoryRequest::from_value(json!({ "kidAge": 5.0 })).normalize();
        assert_eq!(opts.kid_age.as_deref(), Some("5"));

        let opts = StoryRequest::from_value(json!({ "kidAge": 4.5, "kidName": 2.0 })).normalize();
        assert_eq!(opts.kid_age.as_deref(), Some("4.5"));
        assert_eq!(opts.kid_name, "2");
    }

    #[test]
    fn test_fields_truncate_to_limits() {
        let long = "x".repeat(500);
        let req = StoryRequest::from_value(json!({
            "kidName": long,
            "tone": long,
            "length": long,
            "setting": long,
            "focus": long,
            "supporting": long
        }));
        let opts = req.normalize();
        assert_eq!(opts.kid_name.chars().count(), MAX_NAME_CHARS);
        assert_eq!(opts.tone.chars().count(), MAX_TONE_CHARS);
        assert_eq!(opts.length_tag.chars().count(), MAX_LENGTH_CHARS);
        assert_eq!(opts.setting.chars().count(), MAX_SETTING_CHARS);
        assert_eq!(opts.focus.chars().count(), MAX_FOCUS_CHARS);
        assert_eq!(opts.supporting.chars().count(), MAX_SUPPORTING_CHARS);
        assert_eq!(opts.length, StoryLength::Medium);
    }

    #[test]
    fn test_fields_at_limit_are_unchanged() {
        let name = "n".repeat(MAX_NAME_CHARS);
        let req = StoryRequest::from_value(json!({ "kidName": name, "focus": "sharing" }));
        let opts = req.normalize();
        assert_eq!(opts.kid_name, name);
        assert_eq!(opts.focus, "sharing");
    }

    #[test]
    fn test_truncation_cuts_mid_word() {
        assert_eq!(truncate_chars("Wonderful", 6), "Wonder");
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_length_tag_uses_truncated_value() {
        let req = StoryRequest::from_value(json!({ "length": "long" }));
        assert_eq!(req.normalize().length, StoryLength::Long);

        let req = StoryRequest::from_value(json!({ "length": "short" }));
        assert_eq!(req.normalize().length, StoryLength::Short);
    }
}
