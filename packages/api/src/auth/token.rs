//! # Access and refresh tokens
//!
//! Both credentials are HS256 JWTs carrying the same [`Claims`]; they differ only in the
//! secret that signs them and in their lifetime. A [`TokenKeys`] pairs the encoding and
//! decoding halves of one secret together with the TTL used when issuing.
//!
//! Verification checks signature and `exp`. The `role` claim deserialises into the closed
//! [`Role`] enumeration, so a token naming any other role is rejected as malformed.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Auth;
use crate::error::Result;
use crate::models::Role;

/// Claims embedded in every Eventora token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub email: String,
    pub role: Role,
    /// Issued at (seconds since epoch).
    pub iat: i64,
    /// Expires at (seconds since epoch).
    pub exp: i64,
}

/// Signing material for one kind of token.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    pub fn access(auth: &Auth) -> Self {
        Self::new(&auth.access_secret, auth.access_ttl_secs)
    }

    pub fn refresh(auth: &Auth) -> Self {
        Self::new(&auth.refresh_secret, auth.refresh_ttl_secs)
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Sign a fresh token for `email`/`role` valid for the configured TTL.
    pub fn issue(&self, email: &str, role: Role) -> Result<String> {
        let now = Utc::now().timestamp();
        self.sign(&Claims {
            email: email.to_string(),
            role,
            iat: now,
            exp: now + self.ttl_secs,
        })
    }

    /// Sign arbitrary claims.
    pub fn sign(&self, claims: &Claims) -> Result<String> {
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding)?)
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}
