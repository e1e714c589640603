//! Claims payload carried inside a signed token.

use std::collections::BTreeMap;

use serde_json::Value;

/// Claim key reserved for the expiry timestamp. The issuer injects it and the
/// verifier inspects it; every other key is opaque to this crate.
pub const EXPIRY_CLAIM: &str = "exp";

/// Claims mapping embedded in a token: string keys to arbitrary JSON values.
pub type Claims = BTreeMap<String, Value>;

/// Read the expiry timestamp (Unix seconds) out of a claims mapping.
pub fn expiry(claims: &Claims) -> Option<i64> {
    claims.get(EXPIRY_CLAIM).and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expiry_present() {
        let mut claims = Claims::new();
        claims.insert(EXPIRY_CLAIM.to_string(), json!(1_700_000_000));
        assert_eq!(expiry(&claims), Some(1_700_000_000));
    }

    #[test]
    fn test_expiry_missing() {
        let claims = Claims::new();
        assert_eq!(expiry(&claims), None);
    }

    #[test]
    fn test_expiry_not_a_timestamp() {
        let mut claims = Claims::new();
        claims.insert(EXPIRY_CLAIM.to_string(), json!("soon"));
        assert_eq!(expiry(&claims), None);
    }
}
