//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Panels own their remote resources and render them through
//! `ResourceView`; the form components read and write the auth flow signal
//! owned by the auth page.

pub mod form_field;
pub mod forecast_overview;
pub mod login_form;
pub mod model_performance;
pub mod resource_view;
pub mod sidebar;
pub mod signup_form;
pub mod summary_cards;
pub mod supply_chain_chart;
pub mod tracking_panel;
