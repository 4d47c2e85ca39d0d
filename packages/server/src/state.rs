use std::sync::Arc;

use api::auth::TokenKeys;
use api::Settings;

use crate::store::Store;

/// Shared state handed to every backend handler.
pub struct AppState {
    pub store: Store,
    pub access: TokenKeys,
    pub refresh: TokenKeys,
}

impl AppState {
    pub fn new(settings: &Settings, store: Store) -> Arc<Self> {
        Self::with_keys(
            store,
            TokenKeys::access(&settings.auth),
            TokenKeys::refresh(&settings.auth),
        )
    }

    pub fn with_keys(store: Store, access: TokenKeys, refresh: TokenKeys) -> Arc<Self> {
        Arc::new(Self {
            store,
            access,
            refresh,
        })
    }
}
