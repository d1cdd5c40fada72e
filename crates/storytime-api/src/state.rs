//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the story generator (when configured) and server configuration.

use std::sync::Arc;
use storytime_core::{BoxedStoryGenerator, StoryError};
use storytime_openai::OpenAiStoryGenerator;
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}: {}", addr, e))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: "development".to_string(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Story generator, absent when the API key is not configured
    pub generator: Option<BoxedStoryGenerator>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state from the environment.
    ///
    /// A missing API key does not stop the server; every story request
    /// then fails with a configuration error.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let generator = match OpenAiStoryGenerator::from_env() {
            Ok(generator) => Some(Arc::new(generator) as BoxedStoryGenerator),
            Err(StoryError::Configuration(message)) => {
                warn!("{}", message);
                None
            }
            Err(e) => return Err(anyhow::anyhow!("Failed to initialize OpenAI: {}", e)),
        };

        Ok(Self { generator, config })
    }

    /// Build state around an explicit generator
    pub fn with_generator(generator: BoxedStoryGenerator) -> Self {
        Self {
            generator: Some(generator),
            config: AppConfig::default(),
        }
    }

    /// State with no generator configured
    pub fn unconfigured() -> Self {
        Self {
            generator: None,
            config: AppConfig::default(),
        }
    }

    /// Name of the configured provider, if any
    pub fn provider_name(&self) -> Option<&'static str> {
        self.generator.as_ref().map(|g| g.provider_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_invalid_socket_addr() {
        let config = AppConfig {
            host: "not a host".to_string(),
            ..AppConfig::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_unconfigured_state() {
        let state = AppState::unconfigured();
        assert!(state.generator.is_none());
        assert_eq!(state.provider_name(), None);
    }
}
