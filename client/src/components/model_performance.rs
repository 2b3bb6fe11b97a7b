//! Model performance metrics for a selectable model, plus model info.
//!
//! SYSTEM CONTEXT
//! ==============
//! Changing the applied model id re-activates the performance resource;
//! a slower response for a previously selected id is discarded.

#[cfg(test)]
#[path = "model_performance_test.rs"]
mod model_performance_test;

use leptos::prelude::*;
use supply_dash::RemoteResource;
use supply_dash::api::types::{ModelInfo, PerformanceData};

use crate::app::Api;
use crate::components::resource_view::ResourceView;
use crate::state::auth::AuthState;
use crate::util::fetch::activate;
use crate::util::format::{percent, value_text};

pub const DEFAULT_MODEL_ID: &str = "demand-forecast";

fn metric_rows(data: &PerformanceData) -> [(&'static str, String); 4] {
    [
        ("Accuracy", percent(data.accuracy)),
        ("Precision", percent(data.precision)),
        ("Recall", percent(data.recall)),
        ("F1 score", percent(data.f1_score)),
    ]
}

#[component]
pub fn ModelPerformance() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let model_id = RwSignal::new(DEFAULT_MODEL_ID.to_owned());
    let model_input = RwSignal::new(DEFAULT_MODEL_ID.to_owned());
    let performance = RwSignal::new(RemoteResource::<Option<PerformanceData>>::new());
    let info = RwSignal::new(RemoteResource::<Option<ModelInfo>>::new());

    let perf_api = api.clone();
    Effect::new(move || {
        let id = model_id.get();
        let api = perf_api.clone();
        activate(performance, auth, async move { api.model_performance(&id).await });
    });

    activate(info, auth, async move { api.model_info().await });

    let on_apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = model_input.get().trim().to_owned();
        if !id.is_empty() && id != model_id.get_untracked() {
            model_id.set(id);
        }
    };

    view! {
        <section class="panel panel--model">
            <header class="panel__header">
                <h3>"Model performance"</h3>
                <form class="panel__lookup" on:submit=on_apply>
                    <input
                        class="panel__input"
                        type="text"
                        prop:value=move || model_input.get()
                        on:input=move |ev| model_input.set(event_target_value(&ev))
                    />
                    <button class="panel__action" type="submit">"Load"</button>
                </form>
            </header>
            <ResourceView
                resource=performance
                render={|data: &Option<PerformanceData>| {
                    data.as_ref()
                        .map(|d| {
                            metric_rows(d)
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="metric">
                                            <span class="metric__label">{label}</span>
                                            <span class="metric__value">{value}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                }}
            />
            <h4 class="panel__subtitle">"Model info"</h4>
            <ResourceView
                resource=info
                render={|info: &Option<ModelInfo>| {
                    info.as_ref()
                        .map(|i| {
                            view! {
                                <dl class="status-list">
                                    <div class="status-list__row">
                                        <dt>"Type"</dt>
                                        <dd>{i.model_type.clone()}</dd>
                                    </div>
                                    <div class="status-list__row">
                                        <dt>"Features"</dt>
                                        <dd>{value_text(&i.features)}</dd>
                                    </div>
                                </dl>
                            }
                        })
                }}
            />
        </section>
    }
}
