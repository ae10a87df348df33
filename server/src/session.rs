//! Reads the role and expiry out of the API's access token.
//!
//! The signature is not verified: the API owns the signing key and rejects
//! forged tokens itself. The gate only keeps casual visitors out of the
//! admin pages.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

const ROLE_CLAIM_URI: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";
pub const ADMIN_ROLE: &str = "Admin";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("token could not be decoded: {0}")]
    Decode(#[from] jsonwebtoken::errors::Error),
    #[error("token has no expiry")]
    MissingExpiry,
    #[error("token expired")]
    Expired,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub role: Vec<String>,
    #[serde(default, rename = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role", deserialize_with = "one_or_many")]
    pub role_uri: Vec<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(role)) => vec![role],
        Some(OneOrMany::Many(roles)) => roles,
        None => Vec::new(),
    })
}

impl SessionClaims {
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.role.iter().chain(self.role_uri.iter()).map(String::as_str)
    }

    pub fn is_admin(&self) -> bool {
        self.roles().any(|role| role.eq_ignore_ascii_case(ADMIN_ROLE))
    }
}

fn unverified_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    validation
}

/// Decodes the claims and requires an `exp` later than `now_ts`.
pub fn decode_session(token: &str, now_ts: i64) -> Result<SessionClaims, SessionError> {
    let data = decode::<SessionClaims>(token, &DecodingKey::from_secret(&[]), &unverified_validation())?;
    let claims = data.claims;
    match claims.exp {
        None => Err(SessionError::MissingExpiry),
        Some(exp) if exp <= now_ts => Err(SessionError::Expired),
        Some(_) => Ok(claims),
    }
}

#[cfg(test)]
pub(crate) fn sign_for_tests(claims: &serde_json::Value) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        claims,
        &jsonwebtoken::EncodingKey::from_secret(b"not-the-api-key"),
    )
    .expect("encode token")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_750_000_000;

    #[test]
    fn short_role_claim_is_read() {
        let token = sign_for_tests(&json!({ "sub": "7", "role": "Admin", "exp": NOW + 60 }));
        let claims = decode_session(&token, NOW).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("7"));
        assert!(claims.is_admin());
    }

    #[test]
    fn aspnet_role_uri_and_arrays_are_read() {
        let token = sign_for_tests(&json!({
            ROLE_CLAIM_URI: ["User", "admin"],
            "exp": NOW + 60,
            "aud": "booking-api"
        }));
        let claims = decode_session(&token, NOW).unwrap();
        assert_eq!(claims.roles().collect::<Vec<_>>(), vec!["User", "admin"]);
        assert!(claims.is_admin());
    }

    #[test]
    fn users_are_not_admins() {
        let token = sign_for_tests(&json!({ "role": "User", "exp": NOW + 60 }));
        assert!(!decode_session(&token, NOW).unwrap().is_admin());
    }

    #[test]
    fn expiry_is_required_and_enforced() {
        let missing = sign_for_tests(&json!({ "role": "Admin" }));
        assert!(matches!(decode_session(&missing, NOW), Err(SessionError::MissingExpiry)));

        let expired = sign_for_tests(&json!({ "role": "Admin", "exp": NOW }));
        assert!(matches!(decode_session(&expired, NOW), Err(SessionError::Expired)));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(decode_session("not-a-token", NOW), Err(SessionError::Decode(_))));
    }
}
