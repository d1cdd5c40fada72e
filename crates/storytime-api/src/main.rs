//! # StoryTime RS
//!
//! Bedtime-story generation service.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export OPENAI_API_KEY=sk-...
//!
//! # Run the server
//! storytime
//! ```

use storytime_api::{routes, state::AppState};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let state = AppState::new()?;
    let addr = state.config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    match state.provider_name() {
        Some(provider) => info!(
            version = env!("CARGO_PKG_VERSION"),
            environment = %state.config.environment,
            provider,
            "storytime listening on {}",
            addr
        ),
        None => warn!(
            environment = %state.config.environment,
            "storytime listening on {} without a story provider",
            addr
        ),
    }

    axum::serve(listener, routes::create_router(state)).await?;

    Ok(())
}
