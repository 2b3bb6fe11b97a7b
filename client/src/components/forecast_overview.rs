//! Demand, trends and model status as one aggregate panel.
//!
//! The three requests run together and the panel stays in "Loading..."
//! until all of them settle; one failure fails the whole panel.

use leptos::prelude::*;
use supply_dash::RemoteResource;
use supply_dash::api::types::{ForecastStatus, Overview};

use crate::app::Api;
use crate::components::resource_view::ResourceView;
use crate::state::auth::AuthState;
use crate::util::fetch::activate;

fn status_row(label: &'static str, status: Option<&ForecastStatus>) -> impl IntoView + use<> {
    let text = status.map_or_else(|| "—".to_owned(), |s| s.status.clone());
    view! {
        <div class="status-list__row">
            <dt>{label}</dt>
            <dd>{text}</dd>
        </div>
    }
}

#[component]
pub fn ForecastOverview() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let overview = RwSignal::new(RemoteResource::<Overview>::new());

    let load = move || {
        let api = api.clone();
        activate(overview, auth, async move { api.overview().await });
    };
    load();

    view! {
        <section class="panel panel--overview">
            <header class="panel__header">
                <h3>"Forecast overview"</h3>
                <button class="panel__action" on:click=move |_| load()>"Refresh"</button>
            </header>
            <ResourceView
                resource=overview
                render={|o: &Overview| {
                    view! {
                        <dl class="status-list">
                            {status_row("Demand forecast", o.demand.as_ref())}
                            {status_row("Trends", o.trends.as_ref())}
                            {status_row("Model status", o.model_status.as_ref())}
                        </dl>
                    }
                }}
            />
        </section>
    }
}
