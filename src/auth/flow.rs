//! Login/signup state machine.
//!
//! DESIGN
//! ======
//! Submission is split into a synchronous `begin_*` (validate, move to
//! `Submitting`, hand back the request) and a synchronous `finish_*` (fold
//! the API result into the phase and say what the caller should do next).
//! The browser keeps an `AuthFlow` inside a signal and cannot hold a borrow
//! across an await, so it calls the halves around its own `spawn_local`.
//! Everything else uses the `submit_*` helpers, which await in between.
//!
//! ERROR HANDLING
//! ==============
//! Nothing escapes as an `Err`: validation, transport, application and
//! decode failures all become `FormPhase::Failed` with display lines.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use super::form::{LoginDraft, SignUpDraft};
use crate::api::client::ApiClient;
use crate::api::types::{LoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::session::Session;
use crate::transport::Transport;

/// Authenticated landing view.
pub const DASHBOARD_ROUTE: &str = "/dashboard";
/// Unauthenticated view hosting both forms.
pub const AUTH_ROUTE: &str = "/";

pub const SIGNUP_NOTICE: &str = "Account created successfully. Please log in.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::SignUp,
            Self::SignUp => Self::Login,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(Vec<String>),
}

impl FormPhase {
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Failed(errors) => errors,
            _ => &[],
        }
    }
}

/// One form: its draft plus where its last submission got to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState<D> {
    pub draft: D,
    pub phase: FormPhase,
}

impl<D> FormState<D> {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }
}

/// What the caller should do after a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A session is stored; go to this route.
    Navigate(&'static str),
    /// Account created without a token; the login form is now showing.
    ShowLogin,
    /// The form is in `Failed` with these lines.
    Failed(Vec<String>),
    /// A submission was already in flight; nothing happened.
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFlow {
    mode: AuthMode,
    pub login: FormState<LoginDraft>,
    pub signup: FormState<SignUpDraft>,
    notice: Option<String>,
}

impl AuthFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Informational banner for the login form, e.g. after registering.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Switch between the forms. Drafts and phases of both are kept.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        self.notice = None;
    }

    // =========================================================================
    // LOGIN
    // =========================================================================

    /// Validate the login draft and move to `Submitting`.
    ///
    /// # Errors
    ///
    /// `AuthOutcome::Failed` when validation fails (no request should be
    /// sent), `AuthOutcome::Ignored` while a login is already in flight.
    pub fn begin_login(&mut self) -> Result<LoginRequest, AuthOutcome> {
        begin(&mut self.login, LoginDraft::validate, LoginDraft::to_request)
    }

    pub fn finish_login(&mut self, result: Result<Session, ApiError>) -> AuthOutcome {
        match result {
            Ok(_) => {
                self.login.phase = FormPhase::Success;
                self.notice = None;
                AuthOutcome::Navigate(DASHBOARD_ROUTE)
            }
            Err(err) => fail(&mut self.login.phase, &err),
        }
    }

    pub async fn submit_login<T: Transport>(&mut self, api: &ApiClient<T>) -> AuthOutcome {
        match self.begin_login() {
            Ok(request) => {
                let result = api.login(&request).await;
                self.finish_login(result)
            }
            Err(outcome) => outcome,
        }
    }

    // =========================================================================
    // SIGNUP
    // =========================================================================

    /// Validate the signup draft and move to `Submitting`.
    ///
    /// # Errors
    ///
    /// Same as [`AuthFlow::begin_login`].
    pub fn begin_signup(&mut self) -> Result<RegisterRequest, AuthOutcome> {
        begin(&mut self.signup, SignUpDraft::validate, SignUpDraft::to_request)
    }

    pub fn finish_signup(&mut self, result: Result<Option<Session>, ApiError>) -> AuthOutcome {
        match result {
            Ok(Some(_)) => {
                self.signup.phase = FormPhase::Success;
                AuthOutcome::Navigate(DASHBOARD_ROUTE)
            }
            Ok(None) => {
                self.signup.phase = FormPhase::Success;
                if self.login.draft.email.trim().is_empty() {
                    self.login.draft.email = self.signup.draft.email.trim().to_owned();
                }
                self.mode = AuthMode::Login;
                self.notice = Some(SIGNUP_NOTICE.to_owned());
                AuthOutcome::ShowLogin
            }
            Err(err) => fail(&mut self.signup.phase, &err),
        }
    }

    pub async fn submit_signup<T: Transport>(&mut self, api: &ApiClient<T>) -> AuthOutcome {
        match self.begin_signup() {
            Ok(request) => {
                let result = api.register(&request).await;
                self.finish_signup(result)
            }
            Err(outcome) => outcome,
        }
    }
}

fn begin<D, R>(
    form: &mut FormState<D>,
    validate: impl Fn(&D) -> Vec<String>,
    to_request: impl Fn(&D) -> R,
) -> Result<R, AuthOutcome> {
    if form.is_submitting() {
        return Err(AuthOutcome::Ignored);
    }
    let errors = validate(&form.draft);
    if !errors.is_empty() {
        form.phase = FormPhase::Failed(errors.clone());
        return Err(AuthOutcome::Failed(errors));
    }
    form.phase = FormPhase::Submitting;
    Ok(to_request(&form.draft))
}

fn fail(phase: &mut FormPhase, err: &ApiError) -> AuthOutcome {
    tracing::debug!(error = %err, "auth submission failed");
    let messages = err.user_messages();
    *phase = FormPhase::Failed(messages.clone());
    AuthOutcome::Failed(messages)
}
