//! # Request Handlers
//!
//! Axum request handlers for the story API.
//! The story handler answers every method itself so that the method gate,
//! preflight and error bodies all carry the same cross-origin headers.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderName, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use storytime_core::{StoryError, StoryPrompt, StoryRequest, StoryResult};
use storytime_openai::missing_key_message;
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Successful story response
#[derive(Debug, Serialize, Deserialize)]
pub struct StoryResponse {
    pub story: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Cross-origin headers attached to every story response
pub fn cors_headers() -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "Content-Type, Authorization",
        ),
        (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
    ]
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, cors_headers(), Json(body)).into_response()
}

fn story_error_to_response(err: StoryError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json_response(status, ErrorResponse::new(err.public_message()))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "storytime",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.provider_name(),
    }))
}

/// Story generation endpoint (any method; only POST and OPTIONS succeed)
#[instrument(skip_all, fields(method = %method, body_len = body.len()))]
pub async fn generate_story(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return (StatusCode::NO_CONTENT, cors_headers()).into_response();
    }

    if method != Method::POST {
        warn!("Rejected {} request", method);
        return story_error_to_response(StoryError::MethodNotAllowed);
    }

    match generate_story_internal(&state, &body).await {
        Ok(story) => json_response(StatusCode::OK, StoryResponse { story }),
        Err(e) => {
            error!("Story request failed ({}): {}", e.status_code(), e);
            story_error_to_response(e)
        }
    }
}

/// Internal story generation (shared logic)
async fn generate_story_internal(state: &AppState, body: &[u8]) -> StoryResult<String> {
    // Configuration is checked before the body is even looked at
    let generator = state
        .generator
        .as_ref()
        .ok_or_else(|| StoryError::Configuration(missing_key_message()))?;

    let request = StoryRequest::from_body(body)?;
    let options = request.normalize();
    let prompt = StoryPrompt::build(&options);

    info!(
        "Generating story: provider={}, length={:?}, max_output_tokens={}",
        generator.provider_name(),
        options.length,
        prompt.max_output_tokens
    );

    generator.generate(&prompt).await
}

/// Query string of the confirmation page
#[derive(Debug, Deserialize)]
pub struct ThankYouParams {
    #[serde(default)]
    pub sku: Option<String>,
}

/// Confirmation page the buy button redirects to
pub async fn thank_you(Query(params): Query<ThankYouParams>) -> impl IntoResponse {
    let sku = params.sku.as_deref().unwrap_or("unknown");
    Html(format!(r#"
<!DOCTYPE html>
<html>
<head><title>Thank You</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);">
    <div style="background: white; padding: 60px; border-radius: 16px; text-align: center;">
        <div style="font-size: 60px;">🌙</div>
        <h1>Thank you!</h1>
        <p>Item: <code>{}</code></p>
        <p style="color: #666;">Your item was added to your cart.</p>
    </div>
</body>
</html>
"#, escape_html(sku)))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
