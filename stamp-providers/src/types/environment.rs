//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use tracing::Level;

use crate::model_api::ModelApiConfig;

/// Default scoring service host used during local development
const DEVELOPMENT_DATA_SCIENCE_API_URL: &str = "localhost:8000";

/// Default timeout for scoring model requests
const DEFAULT_MODEL_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (local scoring service)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the scoring service host (without scheme)
    ///
    /// # Panics
    ///
    /// Panics if `DATA_SCIENCE_API_URL` is not set outside of development
    #[must_use]
    pub fn data_science_api_url(&self) -> String {
        match self {
            Self::Production | Self::Staging => env::var("DATA_SCIENCE_API_URL")
                .expect("DATA_SCIENCE_API_URL environment variable is not set"),
            Self::Development => env::var("DATA_SCIENCE_API_URL")
                .unwrap_or_else(|_| DEVELOPMENT_DATA_SCIENCE_API_URL.to_string()),
        }
    }

    /// Timeout applied to every scoring model request
    #[must_use]
    pub fn model_request_timeout(&self) -> Duration {
        let secs = env::var("MODEL_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_MODEL_REQUEST_TIMEOUT_SECS);

        Duration::from_secs(secs)
    }

    /// Model API client configuration for this environment
    #[must_use]
    pub fn model_api_config(&self) -> ModelApiConfig {
        ModelApiConfig {
            host: self.data_science_api_url(),
            request_timeout: self.model_request_timeout(),
        }
    }

    /// Whether logs should be emitted as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development => Level::DEBUG,
            })
    }
}
