//! `/auth/*` endpoints: register, login, logout, refresh and "who am I".

use std::sync::Arc;

use api::auth::cookies::{
    access_token, credential_cookie, refresh_token, removal_cookie, ACCESS_TOKEN_COOKIE,
    REFRESH_TOKEN_COOKIE,
};
use api::client::{LoginRequest, LoginTokens};
use api::models::{Role, UserProfile, UserStatus};
use api::ApiResponse;
use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{normalize_email, NewAccount};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedToken {
    pub access_token: String,
}

/// Resolve the caller's account from the `accessToken` cookie.
pub async fn current_account(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<UserProfile, ApiError> {
    let token = access_token(headers).ok_or(ApiError::Unauthorized)?;
    let claims = state.access.verify(&token).map_err(|e| {
        debug!("Rejected access token: {}", e);
        ApiError::Unauthorized
    })?;
    let account = state
        .store
        .find_account(&claims.email)
        .await
        .ok_or(ApiError::Unauthorized)?;
    Ok(account.profile)
}

/// Like [`current_account`], but only for accounts that are still active.
pub async fn active_account(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<UserProfile, ApiError> {
    let profile = current_account(state, headers).await?;
    if profile.status != UserStatus::Active {
        return Err(ApiError::Forbidden(format!(
            "Account is {}",
            profile.status.as_str().to_lowercase()
        )));
    }
    Ok(profile)
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = normalize_email(&body.email);
    let full_name = body.full_name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::BadRequest("Invalid email address".to_string()));
    }
    if body.password.len() < 8 {
        return Err(ApiError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    if full_name.is_empty() {
        return Err(ApiError::BadRequest("Full name is required".to_string()));
    }
    let role = body.role.unwrap_or(Role::User);
    if role == Role::Admin {
        return Err(ApiError::BadRequest(
            "Admin accounts cannot be self-registered".to_string(),
        ));
    }

    let profile = state
        .store
        .create_account(NewAccount {
            id: None,
            email,
            password: body.password,
            role,
            status: UserStatus::Active,
            full_name: Some(full_name),
            profile_image: None,
        })
        .await?;

    info!("Registered {} as {}", profile.email, profile.role);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("User registered successfully", profile)),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state
        .store
        .check_credentials(&body.email, &body.password)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;
    if account.profile.status != UserStatus::Active {
        return Err(ApiError::Forbidden(format!(
            "Account is {}",
            account.profile.status.as_str().to_lowercase()
        )));
    }

    let profile = &account.profile;
    let tokens = LoginTokens {
        access_token: state.access.issue(&profile.email, profile.role)?,
        refresh_token: state.refresh.issue(&profile.email, profile.role)?,
    };

    info!("{} logged in", profile.email);
    Ok((
        AppendHeaders([
            (
                SET_COOKIE,
                credential_cookie(
                    ACCESS_TOKEN_COOKIE,
                    &tokens.access_token,
                    state.access.ttl_secs(),
                ),
            ),
            (
                SET_COOKIE,
                credential_cookie(
                    REFRESH_TOKEN_COOKIE,
                    &tokens.refresh_token,
                    state.refresh.ttl_secs(),
                ),
            ),
        ]),
        Json(ApiResponse::ok("User logged in successfully", tokens)),
    ))
}

pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([
            (SET_COOKIE, removal_cookie(ACCESS_TOKEN_COOKIE)),
            (SET_COOKIE, removal_cookie(REFRESH_TOKEN_COOKIE)),
        ]),
        Json(ApiResponse::ok("User logged out successfully", ())),
    )
}

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let token = refresh_token(&headers).ok_or(ApiError::Unauthorized)?;
    let claims = state
        .refresh
        .verify(&token)
        .map_err(|_| ApiError::Unauthorized)?;
    let account = state
        .store
        .find_account(&claims.email)
        .await
        .ok_or(ApiError::Unauthorized)?;
    if account.profile.status != UserStatus::Active {
        return Err(ApiError::Unauthorized);
    }

    let access_token = state
        .access
        .issue(&account.profile.email, account.profile.role)?;
    Ok((
        AppendHeaders([(
            SET_COOKIE,
            credential_cookie(ACCESS_TOKEN_COOKIE, &access_token, state.access.ttl_secs()),
        )]),
        Json(ApiResponse::ok(
            "Access token refreshed",
            RefreshedToken { access_token },
        )),
    ))
}

pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let profile = current_account(&state, &headers).await?;
    Ok(Json(ApiResponse::ok("Profile retrieved successfully", profile)))
}
