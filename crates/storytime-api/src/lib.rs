//! # storytime-api
//!
//! HTTP API layer for storytime-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The bedtime-story endpoint proxying to the OpenAI Responses API
//! - The checkout confirmation page
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/` | Generate a story |
//! | OPTIONS | `/` | CORS preflight (204) |
//! | POST | `/api/generate-story` | Generate a story |
//! | GET | `/health` | Health check |
//! | GET | `/thank-you.html` | Checkout confirmation |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
