use std::sync::Arc;

use api::auth::TokenKeys;
use api::{BackendClient, SessionResolver, Settings};

/// Immutable per-process state: the session resolver and the backend client.
pub struct AppState {
    pub resolver: SessionResolver,
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(settings: &Settings) -> api::Result<Arc<Self>> {
        let backend = BackendClient::new(&settings.backend)?;
        Ok(Self::with_parts(TokenKeys::access(&settings.auth), backend))
    }

    pub fn with_parts(access: TokenKeys, backend: BackendClient) -> Arc<Self> {
        Arc::new(Self {
            resolver: SessionResolver::new(access, backend.clone()),
            backend,
        })
    }
}
