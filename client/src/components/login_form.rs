//! Login form bound to the shared auth flow.

use leptos::prelude::*;
use supply_dash::auth::AuthFlow;

use crate::components::form_field::FormField;

#[component]
pub fn LoginForm(flow: RwSignal<AuthFlow>, on_submit: Callback<()>, on_toggle: Callback<()>) -> impl IntoView {
    let submitting = move || flow.with(|f| f.login.is_submitting());
    let errors = move || flow.with(|f| f.login.phase.errors().to_vec());

    view! {
        <form
            class="auth-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h2 class="auth-form__title">"Sign in"</h2>
            <Show when=move || flow.with(|f| f.notice().is_some())>
                <p class="auth-form__notice">{move || flow.with(|f| f.notice().unwrap_or_default().to_owned())}</p>
            </Show>
            <FormField
                label="Email"
                input_type="email"
                autocomplete="email"
                value=Signal::derive(move || flow.with(|f| f.login.draft.email.clone()))
                on_input=Callback::new(move |v| flow.update(|f| f.login.draft.email = v))
            />
            <FormField
                label="Password"
                input_type="password"
                autocomplete="current-password"
                value=Signal::derive(move || flow.with(|f| f.login.draft.password.clone()))
                on_input=Callback::new(move |v| flow.update(|f| f.login.draft.password = v))
            />
            <ul class="auth-form__errors">
                {move || errors().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
            </ul>
            <button class="auth-form__submit" type="submit" disabled=submitting>
                {move || if submitting() { "Signing in..." } else { "Sign in" }}
            </button>
            <p class="auth-form__switch">
                "No account? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    on_toggle.run(());
                }>"Create one"</a>
            </p>
        </form>
    }
}
