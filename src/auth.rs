use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

const USER_ID_CLAIMS: [&str; 3] = ["user_id", "userId", "sub"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthUser {
    pub id: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("missing or malformed authorization header")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("token expired")]
    Expired,
    #[error("token secret is not configured")]
    MissingSecret,
}

/// Maps a bearer token to the id of the user it was issued for.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<AuthUser, AuthError>;
}

pub fn extract_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(AuthError::MissingToken)
}

/// HS256 compact JWT verifier.
#[derive(Clone)]
pub struct JwtVerifier {
    secret: Option<String>,
}

impl JwtVerifier {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }
}

#[async_trait]
impl IdentityVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<AuthUser, AuthError> {
        let secret = self.secret.as_deref().ok_or(AuthError::MissingSecret)?;
        let payload = verify_hs256(token, secret)?;
        validate_registered_claims(&payload)?;

        let id = USER_ID_CLAIMS
            .iter()
            .find_map(|claim| {
                payload
                    .get(*claim)
                    .and_then(|value| value.as_str())
                    .filter(|id| !id.is_empty())
            })
            .ok_or(AuthError::InvalidToken)?;

        Ok(AuthUser { id: id.to_string() })
    }
}

fn verify_hs256(token: &str, secret: &str) -> Result<serde_json::Value, AuthError> {
    let mut parts = token.split('.');
    let header_b64 = parts.next().ok_or(AuthError::InvalidToken)?;
    let payload_b64 = parts.next().ok_or(AuthError::InvalidToken)?;
    let sig_b64 = parts.next().ok_or(AuthError::InvalidToken)?;
    if parts.next().is_some() {
        return Err(AuthError::InvalidToken);
    }

    let header_json = decode_json(header_b64)?;
    let alg = header_json
        .get("alg")
        .and_then(|value| value.as_str())
        .ok_or(AuthError::InvalidToken)?;
    if alg != "HS256" {
        return Err(AuthError::InvalidToken);
    }

    let sig_bytes = URL_SAFE_NO_PAD
        .decode(sig_b64.as_bytes())
        .map_err(|_| AuthError::InvalidToken)?;
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AuthError::InvalidToken)?;
    mac.update(format!("{header_b64}.{payload_b64}").as_bytes());
    mac.verify_slice(&sig_bytes)
        .map_err(|_| AuthError::InvalidToken)?;

    decode_json(payload_b64)
}

fn decode_json(segment: &str) -> Result<serde_json::Value, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.as_bytes())
        .map_err(|_| AuthError::InvalidToken)?;
    serde_json::from_slice(&bytes).map_err(|_| AuthError::InvalidToken)
}

fn validate_registered_claims(payload: &serde_json::Value) -> Result<(), AuthError> {
    let now = Utc::now().timestamp();

    if let Some(exp) = payload.get("exp").and_then(|value| value.as_i64()) {
        if now >= exp {
            return Err(AuthError::Expired);
        }
    }

    if let Some(nbf) = payload.get("nbf").and_then(|value| value.as_i64()) {
        if now < nbf {
            return Err(AuthError::InvalidToken);
        }
    }

    Ok(())
}

/// Issues an HS256 token for `user_id` valid for `ttl`.
pub fn sign_token(user_id: &str, secret: &str, ttl: Duration) -> Result<String, AuthError> {
    let issued_at = Utc::now();
    let exp = issued_at
        .checked_add_signed(ttl)
        .ok_or(AuthError::InvalidToken)?;

    let header_json = serde_json::json!({
        "alg": "HS256",
        "typ": "JWT",
    });
    let payload_json = serde_json::json!({
        "sub": user_id,
        "iat": issued_at.timestamp(),
        "exp": exp.timestamp(),
    });

    let header_b64 = URL_SAFE_NO_PAD
        .encode(serde_json::to_vec(&header_json).map_err(|_| AuthError::InvalidToken)?);
    let payload_b64 = URL_SAFE_NO_PAD
        .encode(serde_json::to_vec(&payload_json).map_err(|_| AuthError::InvalidToken)?);
    let signing_input = format!("{header_b64}.{payload_b64}");

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AuthError::InvalidToken)?;
    mac.update(signing_input.as_bytes());
    let sig_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{signing_input}.{sig_b64}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const SECRET: &str = "test-secret";

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_token(&headers_with("Bearer abc")).unwrap(), "abc");
        assert_eq!(
            extract_token(&headers_with("Basic abc")),
            Err(AuthError::MissingToken)
        );
        assert_eq!(
            extract_token(&headers_with("Bearer ")),
            Err(AuthError::MissingToken)
        );
        assert_eq!(
            extract_token(&HeaderMap::new()),
            Err(AuthError::MissingToken)
        );
    }

    #[tokio::test]
    async fn test_round_trip_token() {
        let token = sign_token("user-42", SECRET, Duration::hours(1)).unwrap();
        let verifier = JwtVerifier::new(Some(SECRET.to_string()));
        let user = verifier.verify(&token).await.unwrap();
        assert_eq!(user.id, "user-42");
    }

    #[tokio::test]
    async fn test_wrong_secret_rejected() {
        let token = sign_token("user-42", "other", Duration::hours(1)).unwrap();
        let verifier = JwtVerifier::new(Some(SECRET.to_string()));
        assert_eq!(verifier.verify(&token).await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let token = sign_token("user-42", SECRET, Duration::seconds(-10)).unwrap();
        let verifier = JwtVerifier::new(Some(SECRET.to_string()));
        assert_eq!(verifier.verify(&token).await, Err(AuthError::Expired));
    }

    #[tokio::test]
    async fn test_tampered_payload_rejected() {
        let token = sign_token("user-42", SECRET, Duration::hours(1)).unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let forged = URL_SAFE_NO_PAD.encode(br#"{"sub":"admin"}"#);
        let tampered = format!("{}.{}.{}", parts[0], forged, parts[2]);
        let verifier = JwtVerifier::new(Some(SECRET.to_string()));
        assert_eq!(verifier.verify(&tampered).await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let verifier = JwtVerifier::new(Some(SECRET.to_string()));
        assert_eq!(verifier.verify("not-a-jwt").await, Err(AuthError::InvalidToken));
        assert_eq!(verifier.verify("a.b.c.d").await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn test_unconfigured_verifier_rejects_everything() {
        let token = sign_token("user-42", SECRET, Duration::hours(1)).unwrap();
        let verifier = JwtVerifier::new(None);
        assert!(!verifier.is_configured());
        assert_eq!(verifier.verify(&token).await, Err(AuthError::MissingSecret));
    }
}
