//! Reactive state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each struct here is wrapped in an `RwSignal` by `App`. Panel-local data
//! (remote resources, form drafts) stays in the components that own it.

pub mod auth;
pub mod ui;
