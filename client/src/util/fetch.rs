//! Binding a `RemoteResource` signal to one in-flight request.
//!
//! DESIGN
//! ======
//! Every panel goes through [`activate`]: the resource re-enters `Pending`,
//! takes a ticket, and the spawned request commits with that ticket. A
//! second activation before the first settles supersedes it; the late
//! result is discarded by the resource's generation check. Unauthorized
//! failures also flip `AuthState` so the route guard sends the user back to
//! the auth page (the API client has already cleared the stored token).

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;

use leptos::prelude::*;
use supply_dash::{ApiError, RemoteResource, Ticket};

use crate::state::auth::AuthState;

/// Start `request` for `resource`, committing its result when it settles.
pub fn activate<T, F>(resource: RwSignal<RemoteResource<T>>, auth: RwSignal<AuthState>, request: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let Some(ticket) = resource.try_update(RemoteResource::begin) else {
        return;
    };
    leptos::task::spawn_local(async move {
        settle(resource, auth, ticket, request).await;
    });
}

/// Await `request` and commit it under `ticket`. Returns whether the result
/// was kept.
async fn settle<T, F>(
    resource: RwSignal<RemoteResource<T>>,
    auth: RwSignal<AuthState>,
    ticket: Ticket,
    request: F,
) -> bool
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>>,
{
    let result = request.await;
    if result.as_ref().is_err_and(ApiError::is_unauthorized) {
        auth.try_update(AuthState::signed_out);
    }
    // The panel may have unmounted while the request was in flight.
    resource.try_update(|r| r.commit(ticket, result)).unwrap_or(false)
}
