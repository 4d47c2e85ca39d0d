use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::error::ApiError;
use crate::state::AppState;

pub mod auth;
pub mod catalog;

/// Prefix every backend route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/refresh-token", post(auth::refresh))
        .route("/auth/me", get(auth::me))
        .route("/events", get(catalog::events))
        .route("/payments", get(catalog::payments))
        .route("/users", get(catalog::users));

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
