//! # Prompt Construction
//!
//! Turns normalized [`StoryOptions`] into the system and user messages sent
//! to the model. Pure: the same options always render the same prompt.

use crate::story::StoryOptions;

const SYSTEM_PROMPT: &str = "\
You are StoryTime, a cozy bedtime storyteller.
Write soothing, child-safe stories. No scary content, no violence, no adult themes.
Keep the style warm, gentle, and imaginative. Use simple language.
End with a calm, sleepy landing and a reassuring final line.
Return only the story text (no titles, no bullet points).";

/// Rendered prompt plus the token budget that goes with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryPrompt {
    /// Persona and safety instructions
    pub system: String,
    /// Story brief built from the request
    pub user: String,
    /// Output token budget for the model
    pub max_output_tokens: u32,
}

impl StoryPrompt {
    pub fn build(options: &StoryOptions) -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user: render_user_prompt(options),
            max_output_tokens: options.length.max_output_tokens(),
        }
    }
}

fn render_user_prompt(o: &StoryOptions) -> String {
    let age = o
        .kid_age
        .as_deref()
        .map(|age| format!(" (age {})", age))
        .unwrap_or_default();
    let holiday = if o.holiday_mode {
        "ON (festive, cozy, tasteful)"
    } else {
        "OFF"
    };

    format!(
        "Create a {tone} bedtime story about a child named {name}{age}.
Target length: about {minutes} minutes when read aloud.

Include:
- A clear beginning, middle, and gentle ending
- Soft sensory details (warm light, soft blankets, friendly sounds)
- A small lesson that matches the \"Tonight's Focus\" if provided
- A supporting character if provided

Optional details:
- Setting: {setting}
- Tonight's Focus: {focus}
- Supporting character: {supporting}
- Holiday mode: {holiday}

Constraints:
- No brand names
- No moralizing lectures
- Keep it comforting and sleepy",
        tone = o.tone,
        name = o.kid_name,
        age = age,
        minutes = o.length.reading_minutes(),
        setting = or_placeholder(&o.setting, "surprise me"),
        focus = or_placeholder(&o.focus, "just for fun"),
        supporting = or_placeholder(&o.supporting, "none"),
        holiday = holiday,
    )
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::StoryRequest;
    use serde_json::json;

    fn prompt_for(body: serde_json::Value) -> StoryPrompt {
        StoryPrompt::build(&StoryRequest::from_value(body).normalize())
    }

    #[test]
    fn test_default_prompt() {
        let prompt = prompt_for(json!({}));

        assert!(prompt.system.starts_with("You are StoryTime"));
        assert!(prompt.system.ends_with("(no titles, no bullet points)."));
        assert!(prompt
            .user
            .starts_with("Create a soft and sleepy bedtime story about a child named Hero.\n"));
        assert!(prompt.user.contains("about 7–10 minutes when read aloud"));
        assert!(prompt.user.contains("- Setting: surprise me\n"));
        assert!(prompt.user.contains("- Tonight's Focus: just for fun\n"));
        assert!(prompt.user.contains("- Supporting character: none\n"));
        assert!(prompt.user.contains("- Holiday mode: OFF\n"));
        assert!(prompt.user.ends_with("- Keep it comforting and sleepy"));
        assert_eq!(prompt.max_output_tokens, 1200);
    }

    #[test]
    fn test_prompt_embeds_fields() {
        let prompt = prompt_for(json!({
            "kidName": "Mia",
            "kidAge": 6,
            "tone": "silly",
            "length": "short",
            "setting": "a treehouse",
            "focus": "bravery",
            "supporting": "a sleepy owl",
            "holidayMode": true
        }));

        assert!(prompt
            .user
            .starts_with("Create a silly bedtime story about a child named Mia (age 6).\n"));
        assert!(prompt.user.contains("about 3–5 minutes"));
        assert!(prompt.user.contains("- Setting: a treehouse\n"));
        assert!(prompt.user.contains("- Tonight's Focus: bravery\n"));
        assert!(prompt.user.contains("- Supporting character: a sleepy owl\n"));
        assert!(prompt
            .user
            .contains("- Holiday mode: ON (festive, cozy, tasteful)\n"));
        assert_eq!(prompt.max_output_tokens, 700);
    }

    #[test]
    fn test_long_story_budget() {
        let prompt = prompt_for(json!({ "length": "long" }));
        assert!(prompt.user.contains("about 10–15 minutes"));
        assert_eq!(prompt.max_output_tokens, 1800);
    }

    #[test]
    fn test_truncated_fields_render_exactly() {
        let setting = "s".repeat(200);
        let prompt = prompt_for(json!({ "setting": setting }));
        let expected = format!("- Setting: {}\n", "s".repeat(120));
        assert!(prompt.user.contains(&expected));
        assert!(!prompt.user.contains(&"s".repeat(121)));
    }

    #[test]
    fn test_build_is_deterministic() {
        let opts = StoryRequest::from_value(json!({ "kidName": "Leo" })).normalize();
        assert_eq!(StoryPrompt::build(&opts), StoryPrompt::build(&opts));
    }
}
