//! Read-only collections consumed by the dashboards.

use std::sync::Arc;

use api::models::{Event, Payment, Role, UserProfile};
use api::ApiResponse;
use axum::{extract::State, http::HeaderMap, Json};

use super::auth::active_account;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn events(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<Event>>> {
    Json(ApiResponse::ok(
        "Events retrieved successfully",
        state.store.events().await,
    ))
}

pub async fn payments(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Vec<Payment>>>, ApiError> {
    let viewer = active_account(&state, &headers).await?;
    Ok(Json(ApiResponse::ok(
        "Payments retrieved successfully",
        state.store.payments_for(&viewer).await,
    )))
}

pub async fn users(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Vec<UserProfile>>>, ApiError> {
    let viewer = active_account(&state, &headers).await?;
    if viewer.role != Role::Admin {
        return Err(ApiError::Forbidden("Admin access required".to_string()));
    }
    Ok(Json(ApiResponse::ok(
        "Users retrieved successfully",
        state.store.users().await,
    )))
}
