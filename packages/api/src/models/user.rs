//! # User model for authenticated accounts
//!
//! Defines the account-facing types shared by the backend and the web frontend:
//!
//! ## [`Role`]
//!
//! The closed set of account roles. Every gated page names exactly one of these (or
//! none), and a decoded token or profile with any other role string fails to parse, so
//! there is no wildcard role that could slip through a gate.
//!
//! ## [`UserStatus`]
//!
//! Informational account status. The backend refuses logins for accounts that are not
//! [`UserStatus::Active`]; the web frontend only displays it.
//!
//! ## [`UserProfile`]
//!
//! The client-safe projection of an account as returned by `GET /auth/me`. It omits the
//! password hash and serialises with camelCase keys to match the backend envelope.
//! [`UserProfile::display_name`] returns the full name or falls back to the email.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role. Closed enumeration, matched exactly by the role gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Host,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Host, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Host => "HOST",
            Role::Admin => "ADMIN",
        }
    }

    /// Path of the role's own dashboard page.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::User => "/user/dashboard",
            Role::Host => "/host/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status. Informational only: a status this crate does not know about
/// decodes as [`UserStatus::Unknown`] instead of failing the whole profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[serde(alias = "active")]
    Active,
    #[serde(alias = "blocked")]
    Blocked,
    #[serde(alias = "deleted")]
    Deleted,
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Blocked => "BLOCKED",
            UserStatus::Deleted => "DELETED",
            UserStatus::Unknown => "UNKNOWN",
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl UserProfile {
    /// Get display name, falling back to email if the full name is not set.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}
