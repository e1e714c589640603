//! Common error types for the authentication stack.
//!
//! This crate provides the classified failures shared across services.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Token verification and issuance failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The signature checks out but the embedded expiry has passed.
    #[error("Token has expired")]
    TokenExpired,

    /// Bad signature, malformed token, or algorithm mismatch.
    #[error("Invalid token")]
    InvalidToken,

    /// The signing primitive itself failed. Callers treat this as a fatal
    /// misconfiguration, not a per-request condition.
    #[error("Token creation failed")]
    TokenCreationFailed,
}

/// Signing-configuration failures, surfaced at process startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Signing secret is not set")]
    MissingSecret,

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Error response for API clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let (code, message) = match &err {
            AuthError::TokenExpired => ("AUTH_TOKEN_EXPIRED", "Token has expired"),
            AuthError::InvalidToken => ("AUTH_INVALID_TOKEN", "Invalid token"),
            AuthError::TokenCreationFailed => {
                ("AUTH_TOKEN_CREATION_FAILED", "Failed to create token")
            }
        };
        Self::new(code, message)
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
