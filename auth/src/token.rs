//! JWT encoding and decoding utilities.

use chrono::{Duration, Utc};
use error::AuthError;
use hmac::{Hmac, Mac};
use jwt::{SignWithKey, VerifyWithKey};
use sha2::{Sha256, Sha384, Sha512};

use crate::claims::{self, Claims, EXPIRY_CLAIM};
use crate::config::{HmacAlgorithm, JwtConfig};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Sign a claims payload into a token valid for `lifetime`, or for the
/// configured default lifetime when none is supplied.
///
/// The caller's mapping is never touched; the expiry claim is written into a
/// copy before signing, replacing any value the caller put under that key.
pub fn issue_token(
    config: &JwtConfig,
    claims: &Claims,
    lifetime: Option<Duration>,
) -> Result<String, AuthError> {
    let mut to_sign = claims.clone();
    let expires_at = Utc::now() + lifetime.unwrap_or_else(|| config.default_lifetime());
    to_sign.insert(
        EXPIRY_CLAIM.to_string(),
        serde_json::json!(expires_at.timestamp()),
    );

    let signed = match config.algorithm {
        HmacAlgorithm::Hs256 => {
            let key = HmacSha256::new_from_slice(config.secret.as_bytes()).map_err(|e| {
                tracing::error!("Failed to create HMAC key: {}", e);
                AuthError::TokenCreationFailed
            })?;
            to_sign.sign_with_key(&key)
        }
        HmacAlgorithm::Hs384 => {
            let key = HmacSha384::new_from_slice(config.secret.as_bytes()).map_err(|e| {
                tracing::error!("Failed to create HMAC key: {}", e);
                AuthError::TokenCreationFailed
            })?;
            to_sign.sign_with_key(&key)
        }
        HmacAlgorithm::Hs512 => {
            let key = HmacSha512::new_from_slice(config.secret.as_bytes()).map_err(|e| {
                tracing::error!("Failed to create HMAC key: {}", e);
                AuthError::TokenCreationFailed
            })?;
            to_sign.sign_with_key(&key)
        }
    };

    signed.map_err(|e| {
        tracing::error!("Failed to sign token: {}", e);
        AuthError::TokenCreationFailed
    })
}

/// Verify a token's signature and expiry, returning the decoded claims.
///
/// Distinguishes two failures: `TokenExpired` when the signature is good but
/// the embedded expiry is at or before the current time, `InvalidToken` for
/// everything else (bad signature, malformed token, algorithm mismatch).
pub fn verify_token(config: &JwtConfig, token: &str) -> Result<Claims, AuthError> {
    let token_claims: Claims = match config.algorithm {
        HmacAlgorithm::Hs256 => {
            let key = HmacSha256::new_from_slice(config.secret.as_bytes()).map_err(|e| {
                tracing::error!("Failed to create HMAC key: {}", e);
                AuthError::InvalidToken
            })?;
            token.verify_with_key(&key).map_err(|e| {
                tracing::warn!("Failed to verify token: {}", e);
                AuthError::InvalidToken
            })?
        }
        HmacAlgorithm::Hs384 => {
            let key = HmacSha384::new_from_slice(config.secret.as_bytes()).map_err(|e| {
                tracing::error!("Failed to create HMAC key: {}", e);
                AuthError::InvalidToken
            })?;
            token.verify_with_key(&key).map_err(|e| {
                tracing::warn!("Failed to verify token: {}", e);
                AuthError::InvalidToken
            })?
        }
        HmacAlgorithm::Hs512 => {
            let key = HmacSha512::new_from_slice(config.secret.as_bytes()).map_err(|e| {
                tracing::error!("Failed to create HMAC key: {}", e);
                AuthError::InvalidToken
            })?;
            token.verify_with_key(&key).map_err(|e| {
                tracing::warn!("Failed to verify token: {}", e);
                AuthError::InvalidToken
            })?
        }
    };

    // Tokens issued here always carry an integer expiry; anything else did
    // not come from this issuer.
    let expires_at = claims::expiry(&token_claims).ok_or_else(|| {
        tracing::warn!("Token carries no usable expiry claim");
        AuthError::InvalidToken
    })?;

    if Utc::now().timestamp() >= expires_at {
        return Err(AuthError::TokenExpired);
    }

    Ok(token_claims)
}
