//! # In-memory account and catalog store
//!
//! Holds accounts (profile + Argon2 hash, keyed by normalised email), events and
//! payments behind `tokio::sync::RwLock`s. The store can be seeded from a JSON file:
//!
//! ```json
//! {
//!   "users":    [{ "id": "h1", "email": "host@eventora.dev", "password": "...", "role": "HOST", "fullName": "Hana" }],
//!   "events":   [{ "id": "e1", "title": "...", "date": "2030-01-01T18:00:00Z", "hostId": "h1", "status": "OPEN" }],
//!   "payments": [{ "id": "p1", "eventId": "e1", "userId": "u1", "amount": 25.0, "status": "PAID", "createdAt": "..." }]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use api::auth::{hash_password, verify_password};
use api::models::{Event, Payment, Role, UserProfile, UserStatus};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::ApiError;

/// A stored account.
#[derive(Debug, Clone)]
pub struct Account {
    pub profile: UserProfile,
    pub password_hash: String,
}

/// Fields needed to create an account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub id: Option<String>,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub status: UserStatus,
    pub full_name: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedUser {
    #[serde(default)]
    id: Option<String>,
    email: String,
    password: String,
    role: Role,
    #[serde(default)]
    status: Option<UserStatus>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    profile_image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SeedData {
    #[serde(default)]
    users: Vec<SeedUser>,
    #[serde(default)]
    events: Vec<Event>,
    #[serde(default)]
    payments: Vec<Payment>,
}

fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| hash_password("eventora-unknown-account").unwrap_or_default())
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Debug, Default)]
pub struct Store {
    accounts: RwLock<HashMap<String, Account>>,
    events: RwLock<Vec<Event>>,
    payments: RwLock<Vec<Payment>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load users, events and payments from a JSON seed file.
    pub async fn seed_from_file(&self, path: impl AsRef<Path>) -> Result<(), ApiError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ApiError::Internal(format!("reading {}: {e}", path.display())))?;
        self.seed_from_json(&raw)
            .await
            .map_err(|e| ApiError::Internal(format!("seeding from {}: {e}", path.display())))
    }

    /// Load users, events and payments from a JSON document in the seed format.
    pub async fn seed_from_json(&self, raw: &str) -> Result<(), ApiError> {
        let seed: SeedData = serde_json::from_str(raw)
            .map_err(|e| ApiError::Internal(format!("parsing seed data: {e}")))?;

        let (users, events, payments) = (seed.users.len(), seed.events.len(), seed.payments.len());
        for user in seed.users {
            self.create_account(NewAccount {
                id: user.id,
                email: user.email,
                password: user.password,
                role: user.role,
                status: user.status.unwrap_or(UserStatus::Active),
                full_name: user.full_name,
                profile_image: user.profile_image,
            })
            .await?;
        }
        self.events.write().await.extend(seed.events);
        self.payments.write().await.extend(seed.payments);

        info!("Seeded {} users, {} events, {} payments", users, events, payments);
        Ok(())
    }

    /// Create an account. Fails with `Conflict` if the email is taken.
    pub async fn create_account(&self, new: NewAccount) -> Result<UserProfile, ApiError> {
        let email = normalize_email(&new.email);
        let password_hash =
            hash_password(&new.password).map_err(|e| ApiError::Internal(e.to_string()))?;

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&email) {
            return Err(ApiError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }

        let profile = UserProfile {
            id: new.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            email: email.clone(),
            role: new.role,
            status: new.status,
            full_name: new.full_name,
            profile_image: new.profile_image,
        };
        accounts.insert(
            email,
            Account {
                profile: profile.clone(),
                password_hash,
            },
        );
        Ok(profile)
    }

    pub async fn find_account(&self, email: &str) -> Option<Account> {
        self.accounts
            .read()
            .await
            .get(&normalize_email(email))
            .cloned()
    }

    /// Look up `email` and check `password` against it. An unknown email is checked
    /// against a throwaway hash so both outcomes cost one Argon2 verification.
    pub async fn check_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, ApiError> {
        let Some(account) = self.find_account(email).await else {
            let _ = verify_password(password, dummy_hash());
            return Ok(None);
        };
        if verify_password(password, &account.password_hash)? {
            Ok(Some(account))
        } else {
            Ok(None)
        }
    }

    pub async fn users(&self) -> Vec<UserProfile> {
        let mut users: Vec<UserProfile> = self
            .accounts
            .read()
            .await
            .values()
            .map(|a| a.profile.clone())
            .collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        users
    }

    pub async fn events(&self) -> Vec<Event> {
        let mut events = self.events.read().await.clone();
        events.sort_by_key(|e| e.date);
        events
    }

    /// Payments visible to `viewer`: their own for USER, those on hosted events for
    /// HOST, everything for ADMIN.
    pub async fn payments_for(&self, viewer: &UserProfile) -> Vec<Payment> {
        let payments = self.payments.read().await;
        match viewer.role {
            Role::Admin => payments.clone(),
            Role::User => payments
                .iter()
                .filter(|p| p.user_id == viewer.id)
                .cloned()
                .collect(),
            Role::Host => {
                let events = self.events.read().await;
                payments
                    .iter()
                    .filter(|p| {
                        events
                            .iter()
                            .any(|e| e.id == p.event_id && e.host_id == viewer.id)
                    })
                    .cloned()
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(id: &str, email: &str, role: Role) -> NewAccount {
        NewAccount {
            id: Some(id.to_string()),
            email: email.to_string(),
            password: "password123".to_string(),
            role,
            status: UserStatus::Active,
            full_name: None,
            profile_image: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_account() {
        let store = Store::new();
        let profile = store
            .create_account(new_account("u1", "  Ada@Eventora.dev ", Role::User))
            .await
            .unwrap();
        assert_eq!(profile.email, "ada@eventora.dev");

        let account = store.find_account("ADA@eventora.dev").await.unwrap();
        assert_eq!(account.profile.id, "u1");
        assert!(verify_password("password123", &account.password_hash).unwrap());

        let duplicate = store
            .create_account(new_account("u2", "ada@eventora.dev", Role::Host))
            .await;
        assert!(matches!(duplicate, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_payments_scoped_by_role() {
        let store = Store::new();
        store
            .seed_from_json(
                r#"{
                    "users": [
                        { "id": "u1", "email": "u1@eventora.dev", "password": "password123", "role": "USER" },
                        { "id": "h1", "email": "h1@eventora.dev", "password": "password123", "role": "HOST" },
                        { "id": "a1", "email": "a1@eventora.dev", "password": "password123", "role": "ADMIN" }
                    ],
                    "events": [
                        { "id": "e1", "title": "e1", "date": "2030-01-01T10:00:00Z", "hostId": "h1", "status": "OPEN" },
                        { "id": "e2", "title": "e2", "date": "2030-01-02T10:00:00Z", "hostId": "h2", "status": "OPEN" }
                    ],
                    "payments": [
                        { "id": "p1", "eventId": "e1", "userId": "u1", "amount": 10.0, "status": "PAID", "createdAt": "2029-12-01T10:00:00Z" },
                        { "id": "p2", "eventId": "e2", "userId": "u1", "amount": 10.0, "status": "PAID", "createdAt": "2029-12-01T10:00:00Z" },
                        { "id": "p3", "eventId": "e1", "userId": "u9", "amount": 10.0, "status": "PAID", "createdAt": "2029-12-01T10:00:00Z" }
                    ]
                }"#,
            )
            .await
            .unwrap();
        let user = store.find_account("u1@eventora.dev").await.unwrap().profile;
        let host = store.find_account("h1@eventora.dev").await.unwrap().profile;
        let admin = store.find_account("a1@eventora.dev").await.unwrap().profile;

        let ids = |ps: Vec<Payment>| ps.into_iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(store.payments_for(&user).await), vec!["p1", "p2"]);
        assert_eq!(ids(store.payments_for(&host).await), vec!["p1", "p3"]);
        assert_eq!(ids(store.payments_for(&admin).await).len(), 3);
    }

    #[tokio::test]
    async fn test_check_credentials() {
        let store = Store::new();
        store
            .create_account(new_account("u1", "ada@eventora.dev", Role::User))
            .await
            .unwrap();

        let account = store
            .check_credentials("ADA@eventora.dev", "password123")
            .await
            .unwrap();
        assert_eq!(account.unwrap().profile.id, "u1");
        assert!(store
            .check_credentials("ada@eventora.dev", "wrong-password")
            .await
            .unwrap()
            .is_none());
        assert!(store
            .check_credentials("nobody@eventora.dev", "password123")
            .await
            .unwrap()
            .is_none());
        assert!(dummy_hash().starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_seed_from_example_file() {
        let store = Store::new();
        store
            .seed_from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/seed.example.json"))
            .await
            .unwrap();

        let host = store.find_account("host@eventora.dev").await.unwrap();
        assert_eq!(host.profile.role, Role::Host);
        let blocked = store.find_account("blocked@eventora.dev").await.unwrap();
        assert_eq!(blocked.profile.status, UserStatus::Blocked);

        let events = store.events().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "e2");
        assert_eq!(store.payments_for(&host.profile).await.len(), 2);
    }
}
