//! Eventora backend: authentication endpoints plus the read-only collections the
//! dashboards consume, backed by an in-memory store.

use std::sync::Arc;

use anyhow::{Context, Result};
use api::Settings;
use axum::Router;
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub mod error;
pub mod routes;
pub mod state;
pub mod store;

use state::AppState;
use store::{NewAccount, Store};

/// Build the store from settings: seed file first, then the configured admin account.
pub async fn build_store(settings: &Settings) -> Result<Store> {
    let store = Store::new();

    if let Some(path) = &settings.server.seed_file {
        store.seed_from_file(path).await?;
    }

    match (&settings.server.admin_email, &settings.server.admin_password) {
        (Some(email), Some(password)) => {
            if store.find_account(email).await.is_none() {
                store
                    .create_account(NewAccount {
                        id: None,
                        email: email.clone(),
                        password: password.clone(),
                        role: api::Role::Admin,
                        status: api::models::UserStatus::Active,
                        full_name: Some("Administrator".to_string()),
                        profile_image: None,
                    })
                    .await?;
                info!("Created admin account {}", email);
            }
        }
        (Some(_), None) | (None, Some(_)) => {
            warn!("Both server.admin_email and server.admin_password are needed to seed an admin")
        }
        (None, None) => {}
    }

    Ok(store)
}

pub fn app(state: Arc<AppState>) -> Router {
    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn start_server(settings: Settings) -> Result<()> {
    info!("Initializing state...");
    let store = build_store(&settings).await?;
    let state = AppState::new(&settings, store);

    let address = settings.server.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!("Backend running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Backend shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
