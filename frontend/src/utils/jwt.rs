use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

const ROLE_CLAIM_URI: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";
const NAME_ID_CLAIM_URI: &str =
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
const EMAIL_CLAIM_URI: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";
const NAME_CLAIM_URI: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";

pub const ADMIN_ROLE: &str = "Admin";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("token is not a JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not valid claims JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Claims the site reads from the API's access token. Signature is never
/// checked here; the API remains the authority.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub role: Vec<String>,
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

impl TokenClaims {
    pub fn is_admin(&self) -> bool {
        self.role
            .iter()
            .any(|role| role.eq_ignore_ascii_case(ADMIN_ROLE))
    }

    pub fn is_expired(&self, now_ts: i64) -> bool {
        self.exp.map(|exp| exp <= now_ts).unwrap_or(false)
    }

    pub fn seconds_until_expiry(&self, now_ts: i64) -> Option<i64> {
        self.exp.map(|exp| (exp - now_ts).max(0))
    }
}

pub fn decode_claims(token: &str) -> Result<TokenClaims, SessionError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(SessionError::Malformed);
    };
    if parts.next().is_some() {
        return Err(SessionError::Malformed);
    }
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let mut value: serde_json::Value = serde_json::from_slice(&decoded)?;
    normalize_claim_uris(&mut value);
    Ok(serde_json::from_value(value)?)
}

/// ASP.NET identity tokens use long claim URIs or legacy short names; fold
/// them onto the names `TokenClaims` reads. The first source found wins.
fn normalize_claim_uris(value: &mut serde_json::Value) {
    let Some(map) = value.as_object_mut() else {
        return;
    };
    for (uri, short) in [
        (ROLE_CLAIM_URI, "role"),
        (NAME_ID_CLAIM_URI, "sub"),
        (EMAIL_CLAIM_URI, "email"),
        (NAME_CLAIM_URI, "name"),
        ("nameid", "sub"),
        ("userId", "sub"),
        ("unique_name", "name"),
    ] {
        if map.contains_key(short) {
            continue;
        }
        if let Some(claim) = map.remove(uri) {
            map.insert(short.to_string(), claim);
        }
    }
}

#[cfg(test)]
pub(crate) fn encode_unsigned(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_short_claim_names() {
        let token = encode_unsigned(&json!({
            "sub": "42",
            "email": "guest@example.com",
            "name": "Guest",
            "role": "User",
            "exp": 2_000_000_000
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("42"));
        assert_eq!(claims.email.as_deref(), Some("guest@example.com"));
        assert_eq!(claims.role, vec!["User".to_string()]);
        assert!(!claims.is_admin());
    }

    #[test]
    fn decodes_aspnet_claim_uris_and_role_arrays() {
        let token = encode_unsigned(&json!({
            ROLE_CLAIM_URI: ["User", "Admin"],
            NAME_ID_CLAIM_URI: "7",
            EMAIL_CLAIM_URI: "staff@example.com",
            "exp": 2_000_000_000
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("7"));
        assert_eq!(claims.email.as_deref(), Some("staff@example.com"));
        assert!(claims.is_admin());
    }

    #[test]
    fn admin_check_ignores_case() {
        let claims = TokenClaims {
            role: vec!["admin".into()],
            ..TokenClaims::default()
        };
        assert!(claims.is_admin());
    }

    #[test]
    fn expiry_helpers_use_exp_claim() {
        let claims = TokenClaims {
            exp: Some(1_000),
            ..TokenClaims::default()
        };
        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1_000));
        assert_eq!(claims.seconds_until_expiry(400), Some(600));
        assert_eq!(claims.seconds_until_expiry(5_000), Some(0));
        assert!(!TokenClaims::default().is_expired(i64::MAX));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!(decode_claims("abc"), Err(SessionError::Malformed)));
        assert!(matches!(
            decode_claims("a.b.c.d"),
            Err(SessionError::Malformed)
        ));
        assert!(matches!(
            decode_claims("a.!!!.c"),
            Err(SessionError::Encoding(_))
        ));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(
            decode_claims(&not_json),
            Err(SessionError::Payload(_))
        ));
    }
}
