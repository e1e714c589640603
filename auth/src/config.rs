//! Signing configuration.
//!
//! Loaded once at startup and passed by reference into both token
//! operations; nothing here is mutated afterwards.

use std::str::FromStr;

use chrono::Duration;
use error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default token lifetime when the caller supplies none: 15 minutes.
pub const DEFAULT_LIFETIME_SECS: i64 = 15 * 60;

/// Supported symmetric signing schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HmacAlgorithm {
    /// HMAC with SHA-256
    Hs256,
    /// HMAC with SHA-384
    Hs384,
    /// HMAC with SHA-512
    Hs512,
}

impl HmacAlgorithm {
    /// The conventional JWT header name for this scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hs256 => "HS256",
            Self::Hs384 => "HS384",
            Self::Hs512 => "HS512",
        }
    }
}

impl Default for HmacAlgorithm {
    fn default() -> Self {
        Self::Hs256
    }
}

impl FromStr for HmacAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Self::Hs256),
            "HS384" => Ok(Self::Hs384),
            "HS512" => Ok(Self::Hs512),
            other => Err(ConfigError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// JWT signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing and verifying tokens
    pub secret: String,
    /// Signing scheme used for every issued token
    pub algorithm: HmacAlgorithm,
    /// Lifetime applied when issuance is called without one, in seconds
    pub default_lifetime_secs: i64,
}

impl JwtConfig {
    /// Create a configuration with the default algorithm and lifetime.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: HmacAlgorithm::default(),
            default_lifetime_secs: DEFAULT_LIFETIME_SECS,
        }
    }

    /// Set the signing algorithm.
    pub fn with_algorithm(mut self, algorithm: HmacAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the default token lifetime.
    pub fn with_default_lifetime(mut self, secs: i64) -> Self {
        self.default_lifetime_secs = secs;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// `JWT_SECRET` is required; `JWT_ALGORITHM` and `JWT_LIFETIME_SECS`
    /// fall back to HS256 and 15 minutes. Errors here are startup-fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let mut config = Self::new(secret);

        if let Ok(name) = std::env::var("JWT_ALGORITHM") {
            config.algorithm = name.parse()?;
        }

        if let Ok(secs) = std::env::var("JWT_LIFETIME_SECS") {
            config.default_lifetime_secs = secs
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_LIFETIME_SECS".to_string()))?;
        }

        Ok(config)
    }

    /// Get the default lifetime as a Duration.
    pub fn default_lifetime(&self) -> Duration {
        Duration::seconds(self.default_lifetime_secs)
    }
}
