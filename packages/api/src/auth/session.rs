//! # Per-request session resolution
//!
//! There is no server-side session store. Every server-rendered request rebuilds the
//! caller's identity from the `accessToken` cookie:
//!
//! 1. No cookie → anonymous (`None`).
//! 2. Signature or expiry check fails → anonymous as well. Callers cannot tell a forged
//!    token from a missing one.
//! 3. Verified claims are enriched through `GET /auth/me` with the same cookie. The
//!    profile returned there wins over the token claims, including for `role`.
//! 4. If enrichment fails for any reason the identity degrades to
//!    [`SessionIdentity::Minimal`], holding only the email and role from the token.
//!
//! [`SessionResolver::resolve`] therefore never fails; pages branch on `Option` only.

use http::HeaderMap;
use tracing::{debug, warn};

use super::cookies::access_token;
use super::token::TokenKeys;
use crate::client::BackendClient;
use crate::models::{Role, UserProfile};

/// The verified subset of an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub email: String,
    pub role: Role,
}

/// Identity of the caller for the duration of one request.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionIdentity {
    /// Enriched from the backend profile.
    Full(UserProfile),
    /// Token claims only; the profile lookup was unavailable.
    Minimal(TokenIdentity),
}

impl SessionIdentity {
    pub fn role(&self) -> Role {
        match self {
            SessionIdentity::Full(profile) => profile.role,
            SessionIdentity::Minimal(token) => token.role,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            SessionIdentity::Full(profile) => &profile.email,
            SessionIdentity::Minimal(token) => &token.email,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SessionIdentity::Full(profile) => profile.display_name(),
            SessionIdentity::Minimal(token) => &token.email,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            SessionIdentity::Full(profile) => Some(profile),
            SessionIdentity::Minimal(_) => None,
        }
    }
}

/// Turns request cookies into a [`SessionIdentity`].
#[derive(Clone)]
pub struct SessionResolver {
    keys: TokenKeys,
    backend: BackendClient,
}

impl SessionResolver {
    pub fn new(keys: TokenKeys, backend: BackendClient) -> Self {
        Self { keys, backend }
    }

    pub async fn resolve(&self, headers: &HeaderMap) -> Option<SessionIdentity> {
        let token = access_token(headers)?;
        self.resolve_token(&token).await
    }

    pub async fn resolve_token(&self, token: &str) -> Option<SessionIdentity> {
        let claims = match self.keys.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!("Rejected access token: {}", e);
                return None;
            }
        };

        match self.backend.me(token).await {
            Ok(profile) => Some(SessionIdentity::Full(profile)),
            Err(e) => {
                warn!(
                    "Profile enrichment unavailable for {}, using token claims: {}",
                    claims.email, e
                );
                Some(SessionIdentity::Minimal(TokenIdentity {
                    email: claims.email,
                    role: claims.role,
                }))
            }
        }
    }
}
