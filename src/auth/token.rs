//! Bearer token mint and verification.
//!
//! Tokens are HS256 JWTs keyed by the process-wide signing secret. They carry
//! the user id as `sub` and expire one hour after issuance; nothing about
//! them is persisted or revocable.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Token lifetime in seconds.
pub const TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenSigner {
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();

        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    /// Sign a fresh token for `subject`.
    pub fn mint(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_owned(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Check signature and expiry, returning the claims on success.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &Validation::default()).map(|data| data.claims)
    }
}
