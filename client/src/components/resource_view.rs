//! Uniform rendering of a remote resource.
//!
//! Strict order: pending shows only a loading line, failed shows only the
//! error, a loaded-but-empty value shows "No data available", and only a
//! loaded non-empty value reaches `render`.

use leptos::prelude::*;
use supply_dash::{IsEmpty, Presentation, RemoteResource};

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No data available";

#[component]
pub fn ResourceView<T, F, V>(resource: RwSignal<RemoteResource<T>>, render: F) -> impl IntoView
where
    T: IsEmpty + Send + Sync + 'static,
    F: Fn(&T) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        resource.with(|r| match r.presentation() {
            Presentation::Loading => view! { <p class="panel__status">{LOADING_TEXT}</p> }.into_any(),
            Presentation::Failed(message) => {
                view! { <p class="panel__status panel__status--error">{message.to_owned()}</p> }.into_any()
            }
            Presentation::Empty => view! { <p class="panel__status">{EMPTY_TEXT}</p> }.into_any(),
            Presentation::Ready(value) => render(value).into_any(),
        })
    }
}
