//! Authenticated/unauthenticated state for route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token itself lives in the core's `SessionStore`; this is its reactive
//! mirror. It is flipped on login, on logout, and when any request comes back
//! unauthorized, and the route guards react to it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use supply_dash::SessionStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}

impl AuthState {
    /// Seed from the persisted session so a reload stays signed in.
    #[must_use]
    pub fn from_session(session: &SessionStore) -> Self {
        Self { authenticated: session.is_authenticated() }
    }

    pub fn signed_in(&mut self) {
        self.authenticated = true;
    }

    pub fn signed_out(&mut self) {
        self.authenticated = false;
    }
}
