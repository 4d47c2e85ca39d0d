//! Eventora web frontend: server-rendered pages behind the role gate.
//!
//! Every request resolves the caller from the `accessToken` cookie, checks the page's
//! [`RoleRequirement`](api::auth::RoleRequirement) and either renders HTML or redirects
//! to `/login`. Login and logout are proxied to the backend so its cookies reach the
//! browser unchanged.

use std::sync::Arc;

use anyhow::{Context, Result};
use api::Settings;
use axum::Router;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

pub mod gate;
pub mod routes;
pub mod state;

use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    routes::router(state)
}

pub async fn start_server(settings: Settings) -> Result<()> {
    let state = AppState::new(&settings).context("building backend client")?;
    info!("Using backend at {}", state.backend.base_url());

    let address = settings.web.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!("Web frontend listening on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
