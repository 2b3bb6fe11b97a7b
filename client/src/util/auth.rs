//! Shared auth route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth page and the dashboard mirror each other: each redirects to the
//! other whenever `AuthState` says the user is on the wrong side of login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use supply_dash::auth::{AUTH_ROUTE, DASHBOARD_ROUTE};

use crate::state::auth::AuthState;

fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.authenticated
}

fn should_redirect_auth(state: &AuthState) -> bool {
    state.authenticated
}

/// Redirect to the auth page whenever the session is gone.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(AUTH_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect to the dashboard as soon as a session exists.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_auth(&auth.get()) {
            navigate(DASHBOARD_ROUTE, NavigateOptions::default());
        }
    });
}
