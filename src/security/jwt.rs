//! Session token issue and validation.
//!
//! Tokens are stateless HS256 JWTs binding `{sub, iat, exp}`. There is no
//! server-side session store and no revocation list; validity is determined
//! solely by signature and expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Owns the signing keys and the configured token lifetime.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Issue a signed session token bound to `user_id`.
    pub fn issue(&self, user_id: Uuid) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| ApiError::Internal(format!("failed to sign session token: {e}")))
    }

    /// Verify signature and expiry, resolving the token to the bound user id.
    /// Any malformed, tampered or expired token maps to `Unauthenticated`.
    pub fn resolve(&self, token: &str) -> Result<Uuid, ApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No leeway: an expired token is rejected immediately.
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| ApiError::Unauthenticated)?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-do-not-use-in-production";

    #[test]
    fn test_issue_and_resolve_round_trip() {
        let issuer = TokenIssuer::new(SECRET, 600);
        let user_id = Uuid::new_v4();

        let token = issuer.issue(user_id).unwrap();
        assert_eq!(token.matches('.').count(), 2);

        let resolved = issuer.resolve(&token).unwrap();
        assert_eq!(resolved, user_id);
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = TokenIssuer::new(SECRET, -10);
        let token = issuer.issue(Uuid::new_v4()).unwrap();

        let result = issuer.resolve(&token);
        assert!(matches!(result, Err(ApiError::Unauthenticated)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = TokenIssuer::new(SECRET, 600);
        let token = issuer.issue(Uuid::new_v4()).unwrap();

        // Flip the first character of the signature
        let (payload, signature) = token.rsplit_once('.').unwrap();
        let flipped = if signature.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{payload}.{flipped}{}", &signature[1..]);

        assert!(issuer.resolve(&tampered).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = TokenIssuer::new(SECRET, 600);
        assert!(matches!(
            issuer.resolve("not.a.token"),
            Err(ApiError::Unauthenticated)
        ));
        assert!(matches!(issuer.resolve(""), Err(ApiError::Unauthenticated)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenIssuer::new(SECRET, 600);
        let other = TokenIssuer::new(b"another-secret-entirely", 600);

        let token = issuer.issue(Uuid::new_v4()).unwrap();
        assert!(other.resolve(&token).is_err());
    }
}
