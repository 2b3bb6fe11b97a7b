//! Main dashboard at `/dashboard`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It guards itself with the
//! unauthenticated redirect, greets the user from `/auth/profile`, and shows
//! the panels for the sidebar section that is selected.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use supply_dash::RemoteResource;
use supply_dash::api::types::Profile;

use crate::app::Api;
use crate::components::forecast_overview::ForecastOverview;
use crate::components::model_performance::ModelPerformance;
use crate::components::sidebar::Sidebar;
use crate::components::summary_cards::SummaryCards;
use crate::components::supply_chain_chart::SupplyChainChart;
use crate::components::tracking_panel::TrackingPanel;
use crate::state::auth::AuthState;
use crate::state::ui::{Section, UiState};
use crate::util::auth::install_unauth_redirect;
use crate::util::fetch::activate;

fn greeting(profile: Option<&Profile>) -> String {
    profile.map_or_else(|| "Welcome".to_owned(), |p| format!("Welcome, {}", p.display_name()))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    let profile = RwSignal::new(RemoteResource::<Option<Profile>>::new());
    if auth.get_untracked().authenticated {
        let api = api.clone();
        activate(profile, auth, async move { api.profile().await });
    }

    let on_logout = Callback::new(move |()| {
        api.logout();
        auth.update(AuthState::signed_out);
    });

    let section = Memo::new(move |_| ui.get().section);
    let section_view = move || match section.get() {
        Section::Dashboard => view! {
            <SummaryCards/>
            <ForecastOverview/>
            <SupplyChainChart/>
        }
        .into_any(),
        Section::LiveShipments => view! { <TrackingPanel/> }.into_any(),
        Section::AiPredictions => view! { <ModelPerformance/> }.into_any(),
        other => view! {
            <section class="panel">
                <h3>{other.label()}</h3>
                <p class="panel__status">"This section is not available yet."</p>
            </section>
        }
        .into_any(),
    };

    view! {
        <Show when=move || auth.get().authenticated>
            <div class="dashboard">
                <Sidebar on_logout/>
                <main class="dashboard__main">
                    <header class="dashboard__header">
                        <h1>{move || section.get().label()}</h1>
                        <span class="dashboard__user">
                            {move || profile.with(|r| greeting(r.value().and_then(Option::as_ref)))}
                        </span>
                    </header>
                    {section_view}
                </main>
            </div>
        </Show>
    }
}
