//! JWT token generation and validation
//!
//! Tokens carry the user id and email, are signed with HMAC-SHA256 and
//! expire after a fixed 30 days. Validation checks the signature and the
//! expiry and nothing else; the same policy applies everywhere a token is
//! inspected.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Fixed token lifetime.
pub const TOKEN_EXPIRY_DAYS: i64 = 30;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Email of the authenticated user
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed JWT keys, created once at startup and shared via AppState.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// Token service for issuing and validating signed tokens.
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
}

impl TokenService {
    /// Create a new token service with pre-computed keys.
    /// Call once at startup and store in AppState, not per request.
    pub fn new(secret: &str) -> Self {
        Self {
            keys: JwtKeys::new(secret),
        }
    }

    /// Issue a token for a user, returning the token and its expiry.
    pub fn generate_token(&self, user_id: Uuid, email: &str) -> Result<(String, DateTime<Utc>)> {
        let now = Utc::now();
        let expire_date = now + Duration::days(TOKEN_EXPIRY_DAYS);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: expire_date.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to generate token: {}", e))?;

        Ok((token, expire_date))
    }

    /// Validate a token's signature and expiry and return its claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }

    /// Extract the subject user id from a validated token.
    pub fn user_id_from_token(&self, token: &str) -> Result<Uuid> {
        let claims = self.validate_token(token)?;
        Uuid::parse_str(&claims.sub).map_err(|_| anyhow::anyhow!("Invalid user ID in token"))
    }
}
