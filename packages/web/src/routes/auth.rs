//! Login and logout, proxied to the backend.

use std::sync::Arc;

use api::auth::cookies::{access_token, removal_cookie, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use api::auth::LOGIN_PATH;
use api::client::LoginRequest;
use api::Error;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use axum::Form;
use dioxus::prelude::*;
use serde::Deserialize;
use tracing::{info, warn};
use ui::views::LoginPage;

use crate::state::AppState;

const AFTER_LOGIN: &str = "/dashboard";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

fn login_view(status: StatusCode, error: Option<String>) -> Response {
    let page = ui::render_page("Log in", rsx! { LoginPage { error: error } });
    (status, Html(page)).into_response()
}

pub async fn login_page(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if state.resolver.resolve(&headers).await.is_some() {
        return Redirect::to(AFTER_LOGIN).into_response();
    }
    login_view(StatusCode::OK, None)
}

pub async fn login(State(state): State<Arc<AppState>>, Form(form): Form<LoginForm>) -> Response {
    let credentials = LoginRequest {
        email: form.email.trim().to_string(),
        password: form.password,
    };

    match state.backend.login(&credentials).await {
        Ok(outcome) => {
            info!("{} logged in", credentials.email);
            let cookies: Vec<_> = outcome
                .set_cookies
                .into_iter()
                .map(|cookie| (SET_COOKIE, cookie))
                .collect();
            (AppendHeaders(cookies), Redirect::to(AFTER_LOGIN)).into_response()
        }
        Err(Error::Backend { status, message }) => {
            let status = StatusCode::from_u16(status)
                .ok()
                .filter(|s| s.is_client_error())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            login_view(status, Some(message))
        }
        Err(e) => {
            warn!("Login unavailable: {}", e);
            login_view(
                StatusCode::BAD_GATEWAY,
                Some("Login is unavailable right now. Please try again.".to_string()),
            )
        }
    }
}

/// Clear both credential cookies and tell the backend, without waiting on its answer
/// to decide anything.
pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let token = access_token(&headers);
    if let Err(e) = state.backend.logout(token.as_deref()).await {
        warn!("Backend logout failed: {}", e);
    }

    (
        AppendHeaders([
            (SET_COOKIE, removal_cookie(ACCESS_TOKEN_COOKIE)),
            (SET_COOKIE, removal_cookie(REFRESH_TOKEN_COOKIE)),
        ]),
        Redirect::to(LOGIN_PATH),
    )
        .into_response()
}
