use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

mod auth;
mod pages;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/dashboard", get(pages::dashboard))
        .route("/user/dashboard", get(pages::user_dashboard))
        .route("/host/dashboard", get(pages::host_dashboard))
        .route("/admin/dashboard", get(pages::admin_dashboard))
        .with_state(state)
}
