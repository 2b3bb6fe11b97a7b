//! Login/signup flow.
//!
//! `form` holds the editable drafts and their local validation rules; `flow`
//! is the state machine that turns a submitted draft into a session.

pub mod flow;
pub mod form;

pub use flow::{AUTH_ROUTE, AuthFlow, AuthMode, AuthOutcome, DASHBOARD_ROUTE, FormPhase};
pub use form::{LoginDraft, MIN_PASSWORD_LEN, SignUpDraft};
