//! JWT access-token issuance and verification.
//!
//! This crate provides the token layer of the authentication stack: signing
//! a claims payload with an expiry and verifying/decoding incoming tokens.

mod claims;
mod config;
mod token;

pub use claims::{expiry, Claims, EXPIRY_CLAIM};
pub use config::{HmacAlgorithm, JwtConfig, DEFAULT_LIFETIME_SECS};
pub use token::{issue_token, verify_token};
