//! # API crate: shared domain and session core for Eventora
//!
//! Used by both the backend (`server`) and the server-rendered frontend (`web`).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Credential cookies, JWTs, password hashing, session resolution, role gate |
//! | [`client`] | Typed `reqwest` client for the backend's `{ success, message, data }` envelope |
//! | [`config`] | Layered [`Settings`] (defaults → `eventora.toml` → `EVENTORA__*` env) |
//! | [`dashboard`] | Pure per-role metric aggregation over fetched collections |
//! | [`models`] | Users, roles, events and payments as they cross the network |

pub mod auth;
pub mod client;
pub mod config;
pub mod dashboard;
mod error;
pub mod models;

pub use auth::{SessionIdentity, SessionResolver};
pub use client::{ApiResponse, BackendClient};
pub use config::Settings;
pub use error::{Error, Result};
pub use models::{Role, UserProfile};
