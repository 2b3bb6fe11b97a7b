//! Account registration form bound to the shared auth flow.

use leptos::prelude::*;
use supply_dash::auth::{AuthFlow, SignUpDraft};

use crate::components::form_field::FormField;

/// One bound input per draft field, in display order.
fn field(
    flow: RwSignal<AuthFlow>,
    label: &'static str,
    input_type: &'static str,
    get: fn(&SignUpDraft) -> &String,
    set: fn(&mut SignUpDraft, String),
) -> impl IntoView {
    view! {
        <FormField
            label=label
            input_type=input_type
            value=Signal::derive(move || flow.with(|f| get(&f.signup.draft).clone()))
            on_input=Callback::new(move |v| flow.update(|f| set(&mut f.signup.draft, v)))
        />
    }
}

#[component]
pub fn SignUpForm(flow: RwSignal<AuthFlow>, on_submit: Callback<()>, on_toggle: Callback<()>) -> impl IntoView {
    let submitting = move || flow.with(|f| f.signup.is_submitting());
    let errors = move || flow.with(|f| f.signup.phase.errors().to_vec());

    view! {
        <form
            class="auth-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h2 class="auth-form__title">"Create account"</h2>
            {field(flow, "First name", "text", |d| &d.first_name, |d, v| d.first_name = v)}
            {field(flow, "Last name", "text", |d| &d.last_name, |d, v| d.last_name = v)}
            {field(flow, "Username", "text", |d| &d.username, |d, v| d.username = v)}
            {field(flow, "Email", "email", |d| &d.email, |d, v| d.email = v)}
            {field(flow, "Password", "password", |d| &d.password, |d, v| d.password = v)}
            {field(flow, "Confirm password", "password", |d| &d.confirm_password, |d, v| d.confirm_password = v)}
            <ul class="auth-form__errors">
                {move || errors().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
            </ul>
            <button class="auth-form__submit" type="submit" disabled=submitting>
                {move || if submitting() { "Creating account..." } else { "Sign up" }}
            </button>
            <p class="auth-form__switch">
                "Already registered? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    on_toggle.run(());
                }>"Sign in"</a>
            </p>
        </form>
    }
}
