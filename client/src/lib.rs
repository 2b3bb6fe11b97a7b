//! # client
//!
//! Leptos + WASM frontend for the supply-chain dashboard.
//!
//! This crate contains pages, components, reactive state, and the browser
//! implementations of the core's seams: a `fetch` transport and a
//! `localStorage` session backend. All session, validation and
//! request-lifecycle rules live in `supply-dash`; this crate only renders
//! them and wires them to signals.


pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
///
/// There is no tracing subscriber in the browser. `tracing`'s `log` feature
/// forwards the core's events to `console_log` instead.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match app::browser_api() {
        Ok(api) => leptos::mount::mount_to_body(move || view! { <App api/> }),
        Err(err) => tracing::error!(error = %err, "dashboard not started"),
    }
}
