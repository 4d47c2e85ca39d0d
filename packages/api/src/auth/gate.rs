//! Role gate decisions for server-rendered pages.
//!
//! Matching is exact: there is no role hierarchy, so an ADMIN session is turned away from
//! a HOST page. Every refusal sends the visitor to [`LOGIN_PATH`]; being signed out and
//! holding the wrong role look the same from the outside.

use super::session::SessionIdentity;
use crate::models::Role;

pub const LOGIN_PATH: &str = "/login";

/// What a page demands of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement {
    Public,
    Authenticated,
    Role(Role),
}

impl RoleRequirement {
    pub fn admits(&self, identity: Option<&SessionIdentity>) -> bool {
        match (self, identity) {
            (RoleRequirement::Public, _) => true,
            (RoleRequirement::Authenticated, identity) => identity.is_some(),
            (RoleRequirement::Role(required), Some(identity)) => identity.role() == *required,
            (RoleRequirement::Role(_), None) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Render(Option<SessionIdentity>),
    Redirect(&'static str),
}

pub fn authorize(requirement: RoleRequirement, identity: Option<SessionIdentity>) -> GateDecision {
    if requirement.admits(identity.as_ref()) {
        GateDecision::Render(identity)
    } else {
        GateDecision::Redirect(LOGIN_PATH)
    }
}
