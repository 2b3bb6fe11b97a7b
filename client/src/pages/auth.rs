//! Combined login / signup page at `/`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the unauthenticated landing route. It owns the `AuthFlow` signal,
//! runs submissions through the API client, and flips `AuthState` once a
//! session is stored; the route guard then moves the user to the dashboard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use supply_dash::auth::{AuthFlow, AuthMode, AuthOutcome};

use crate::app::Api;
use crate::components::login_form::LoginForm;
use crate::components::signup_form::SignUpForm;
use crate::state::auth::AuthState;
use crate::util::auth::install_auth_redirect;

fn settle(outcome: AuthOutcome, auth: RwSignal<AuthState>) {
    if let AuthOutcome::Navigate(_) = outcome {
        auth.update(AuthState::signed_in);
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_redirect(auth, use_navigate());

    let flow = RwSignal::new(AuthFlow::new());

    let login_api = api.clone();
    let on_login = Callback::new(move |()| {
        let Some(Ok(request)) = flow.try_update(AuthFlow::begin_login) else {
            return;
        };
        let api = login_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.login(&request).await;
            if let Some(outcome) = flow.try_update(|f| f.finish_login(result)) {
                settle(outcome, auth);
            }
        });
    });

    let on_signup = Callback::new(move |()| {
        let Some(Ok(request)) = flow.try_update(AuthFlow::begin_signup) else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.register(&request).await;
            if let Some(outcome) = flow.try_update(|f| f.finish_signup(result)) {
                settle(outcome, auth);
            }
        });
    });

    let on_toggle = Callback::new(move |()| flow.update(AuthFlow::toggle));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"Supply Chain Dashboard"</h1>
                <Show
                    when=move || flow.with(|f| f.mode() == AuthMode::Login)
                    fallback=move || view! { <SignUpForm flow on_submit=on_signup on_toggle/> }
                >
                    <LoginForm flow on_submit=on_login on_toggle/>
                </Show>
            </div>
        </div>
    }
}
