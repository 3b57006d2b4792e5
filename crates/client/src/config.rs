//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and have defaults:
//! - `SHOPFRONT_API_URL` - Base URL of the backend API, including the
//!   `/api` prefix (default: `http://localhost:8000/api`)
//! - `SHOPFRONT_DATA_DIR` - Directory for the local store, which holds the
//!   session token and the persisted cart (default: `.shopfront`)
//! - `SHOPFRONT_SPLASH_MS` - Minimum startup delay in milliseconds. Purely
//!   cosmetic; frontends that want a minimum spinner duration can set it
//!   (default: 0, disabled)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Default local store directory.
pub const DEFAULT_DATA_DIR: &str = ".shopfront";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shopfront client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend API base URL (includes the `/api` prefix).
    pub api_url: Url,
    /// Directory for durable client-local state.
    pub data_dir: PathBuf,
    /// Minimum startup delay. Zero disables the delay.
    pub splash_delay: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_env_or_default("SHOPFRONT_API_URL", DEFAULT_API_URL)
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPFRONT_API_URL".to_string(), e.to_string()))?;

        let data_dir = PathBuf::from(get_env_or_default("SHOPFRONT_DATA_DIR", DEFAULT_DATA_DIR));

        let splash_ms = get_env_or_default("SHOPFRONT_SPLASH_MS", "0")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPFRONT_SPLASH_MS".to_string(), e.to_string())
            })?;

        Ok(Self {
            api_url,
            data_dir,
            splash_delay: Duration::from_millis(splash_ms),
        })
    }

    /// Build a configuration directly, bypassing the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `api_url` is not a valid URL.
    pub fn new(api_url: &str, data_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let api_url = api_url
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("api_url".to_string(), e.to_string()))?;
        Ok(Self {
            api_url,
            data_dir: data_dir.into(),
            splash_delay: Duration::ZERO,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let config = ClientConfig::new("http://localhost:8000/api", "/tmp/shopfront").unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8000/api");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/shopfront"));
        assert_eq!(config.splash_delay, Duration::ZERO);
    }

    #[test]
    fn test_new_invalid_url() {
        let result = ClientConfig::new("not a url", ".");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
