//! Best-effort expiry extraction from an access token.
//!
//! The Wabot API issues JWT-shaped access tokens. Only the `exp` claim of
//! the payload segment is read, without verifying the signature - the value
//! is a local hint for scheduling refreshes, never an authorization
//! decision. Anything unreadable yields `None` (unknown expiry), which the
//! client treats as "valid until the server says otherwise".

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Extract the `exp` claim from an unverified token, if present.
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    claims.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a token with the given payload JSON and dummy header/signature.
    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn test_exp_claim_extracted() {
        let exp = Utc::now().timestamp() + 3600;
        let token = token_with_payload(&format!(r#"{{"sub":"abc","exp":{}}}"#, exp));
        let expiry = token_expiry(&token).expect("expiry should decode");
        assert_eq!(expiry.timestamp(), exp);
    }

    #[test]
    fn test_missing_exp_claim() {
        let token = token_with_payload(r#"{"sub":"abc"}"#);
        assert_eq!(token_expiry(&token), None);
    }

    #[test]
    fn test_opaque_token() {
        assert_eq!(token_expiry("not-a-jwt"), None);
        assert_eq!(token_expiry(""), None);
    }

    #[test]
    fn test_garbage_payload() {
        // Second segment is neither valid base64 nor JSON
        assert_eq!(token_expiry("aaa.!!!.bbb"), None);
        let bad_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
        assert_eq!(token_expiry(&bad_json), None);
    }
}
