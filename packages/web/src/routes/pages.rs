//! Home page and the role dashboards.

use std::sync::Arc;

use api::auth::cookies::access_token;
use api::auth::RoleRequirement;
use api::dashboard::{admin_metrics, host_metrics, user_metrics, HostMetrics, UserMetrics};
use api::models::Role;
use api::SessionIdentity;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use chrono::Utc;
use dioxus::prelude::*;
use tracing::warn;
use ui::views::{AdminDashboard, HomePage, HostDashboard, UserDashboard};

use crate::gate::{guard, require};
use crate::state::AppState;

/// Collapse a failed collection fetch into an empty list; dashboards still render.
fn or_empty<T>(what: &str, result: api::Result<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!("Could not load {}: {}", what, e);
        Vec::new()
    })
}

pub async fn home(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let identity = match guard(&state, &headers, RoleRequirement::Public).await {
        Ok(identity) => identity,
        Err(redirect) => return redirect.into_response(),
    };
    let events = or_empty("events", state.backend.events().await);

    let page = ui::render_page(
        "Events",
        rsx! { HomePage { identity: identity, events: events, now: Utc::now() } },
    );
    Html(page).into_response()
}

/// Render the dashboard belonging to `identity`'s role.
async fn render_dashboard(
    state: &AppState,
    headers: &HeaderMap,
    identity: SessionIdentity,
) -> Response {
    let token = access_token(headers).unwrap_or_default();
    let now = Utc::now();
    // Per-user figures are keyed by profile id, which only the backend knows.
    let profile_id = identity.profile().map(|p| p.id.clone());

    let page = match identity.role() {
        Role::User => {
            let events = or_empty("events", state.backend.events().await);
            let payments = or_empty("payments", state.backend.payments(&token).await);
            let metrics = profile_id
                .map(|id| user_metrics(&id, &events, &payments, now))
                .unwrap_or_else(UserMetrics::default);
            ui::render_page(
                "My Dashboard",
                rsx! { UserDashboard { identity: identity, metrics: metrics } },
            )
        }
        Role::Host => {
            let events = or_empty("events", state.backend.events().await);
            let payments = or_empty("payments", state.backend.payments(&token).await);
            let metrics = profile_id
                .map(|id| host_metrics(&id, &events, &payments, now))
                .unwrap_or_else(HostMetrics::default);
            ui::render_page(
                "Host Dashboard",
                rsx! { HostDashboard { identity: identity, metrics: metrics } },
            )
        }
        Role::Admin => {
            let users = or_empty("users", state.backend.users(&token).await);
            let events = or_empty("events", state.backend.events().await);
            let payments = or_empty("payments", state.backend.payments(&token).await);
            let metrics = admin_metrics(&users, &events, &payments, now);
            ui::render_page(
                "Admin Dashboard",
                rsx! { AdminDashboard { identity: identity, metrics: metrics } },
            )
        }
    };
    Html(page).into_response()
}

async fn gated(state: &AppState, headers: &HeaderMap, requirement: RoleRequirement) -> Response {
    match require(state, headers, requirement).await {
        Ok(identity) => render_dashboard(state, headers, identity).await,
        Err(redirect) => redirect.into_response(),
    }
}

pub async fn dashboard(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    gated(&state, &headers, RoleRequirement::Authenticated).await
}

pub async fn user_dashboard(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    gated(&state, &headers, RoleRequirement::Role(Role::User)).await
}

pub async fn host_dashboard(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    gated(&state, &headers, RoleRequirement::Role(Role::Host)).await
}

pub async fn admin_dashboard(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    gated(&state, &headers, RoleRequirement::Role(Role::Admin)).await
}
