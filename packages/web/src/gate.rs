//! Per-request role gate for page handlers.

use api::auth::{authorize, GateDecision, RoleRequirement};
use api::SessionIdentity;
use axum::http::HeaderMap;
use axum::response::Redirect;
use tracing::debug;

use crate::state::AppState;

/// Resolve the caller once and check it against `requirement`.
///
/// `Ok` carries the identity to render with (always `Some` unless the page is public);
/// `Err` is the redirect to send instead.
pub async fn guard(
    state: &AppState,
    headers: &HeaderMap,
    requirement: RoleRequirement,
) -> Result<Option<SessionIdentity>, Redirect> {
    let identity = state.resolver.resolve(headers).await;
    match authorize(requirement, identity) {
        GateDecision::Render(identity) => Ok(identity),
        GateDecision::Redirect(to) => {
            debug!("Gate {:?} refused, redirecting to {}", requirement, to);
            Err(Redirect::to(to))
        }
    }
}

/// Like [`guard`] for pages that need a signed-in caller.
pub async fn require(
    state: &AppState,
    headers: &HeaderMap,
    requirement: RoleRequirement,
) -> Result<SessionIdentity, Redirect> {
    match guard(state, headers, requirement).await? {
        Some(identity) => Ok(identity),
        None => Err(Redirect::to(api::auth::LOGIN_PATH)),
    }
}
