//! # Routes
//!
//! Axum router configuration for the story API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the main application router
///
/// Routes:
/// - Story generation (any method; POST generates, OPTIONS is preflight):
///   - `/`
///   - `/api/generate-story`
///   - `/.netlify/functions/generate-story` - path used by existing pages
///
/// - Health:
///   - GET /health
///
/// - Static pages:
///   - GET /thank-you.html - Checkout confirmation page
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Story generation
        .route("/", any(handlers::generate_story))
        .route("/api/generate-story", any(handlers::generate_story))
        .route(
            "/.netlify/functions/generate-story",
            any(handlers::generate_story),
        )
        // Health check
        .route("/health", get(handlers::health))
        // Checkout confirmation page
        .route("/thank-you.html", get(handlers::thank_you))
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
