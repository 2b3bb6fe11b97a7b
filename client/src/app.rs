//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use supply_dash::config::{ConfigError, DEFAULT_BASE_URL};
use supply_dash::{ApiClient, ApiConfig, SessionStore};

use crate::net::storage::LocalStorageBackend;
use crate::net::transport::BrowserTransport;
use crate::pages::{auth::AuthPage, dashboard::DashboardPage};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// API client shared through context by every page and panel.
pub type Api = Arc<ApiClient<BrowserTransport>>;

/// Base URL baked in at build time, else the local development backend.
fn base_url() -> &'static str {
    option_env!("SUPPLY_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Build the browser API client: `fetch` transport, `localStorage` session.
///
/// # Errors
///
/// Returns [`ConfigError`] when the configured base URL is unusable.
pub fn browser_api() -> Result<Api, ConfigError> {
    let config = ApiConfig::new(base_url())?;
    let session = Arc::new(SessionStore::new(LocalStorageBackend));
    Ok(Arc::new(ApiClient::new(config, session, BrowserTransport)))
}

/// Root application component.
///
/// Provides the API client and shared state contexts and sets up client-side
/// routing.
#[component]
pub fn App(api: Api) -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::from_session(api.session()));
    let ui = RwSignal::new(UiState::default());

    provide_context(api);
    provide_context(auth);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/supply-dash.css"/>
        <Title text="Supply Chain Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AuthPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
