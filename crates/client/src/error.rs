//! Unified error handling for the orchestration shell.
//!
//! Provides an umbrella `AppError` over the per-layer error types. Library
//! consumers can match on the layer that failed; nothing here is fatal to
//! the process.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::session::AuthError;
use crate::store::StoreError;

/// Application-level error type for the storefront shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Backend API operation failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Client-local storage failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "auth error: invalid email or password");

        let err = AppError::from(ApiError::MissingData);
        assert_eq!(err.to_string(), "API error: response envelope has no data");
    }
}
