use std::sync::Arc;

use super::*;
use crate::config::ApiConfig;
use crate::session::SessionStore;
use crate::transport::Method;
use crate::transport::mock::MockTransport;

fn client(transport: MockTransport) -> ApiClient<MockTransport> {
    let config = ApiConfig::new("http://api.test/api/v1").expect("config");
    ApiClient::new(config, Arc::new(SessionStore::in_memory()), transport)
}

fn filled_login() -> AuthFlow {
    let mut flow = AuthFlow::new();
    flow.login.draft = LoginDraft { email: "ops@example.com".to_owned(), password: "longenough".to_owned() };
    flow
}

fn filled_signup() -> AuthFlow {
    let mut flow = AuthFlow::new();
    flow.toggle();
    flow.signup.draft = SignUpDraft {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "analytical".to_owned(),
        confirm_password: "analytical".to_owned(),
    };
    flow
}

// =============================================================
// Mode
// =============================================================

#[test]
fn toggle_keeps_both_drafts() {
    let mut flow = filled_login();
    flow.signup.draft.username = "kept".to_owned();
    flow.toggle();
    assert_eq!(flow.mode(), AuthMode::SignUp);
    flow.toggle();
    assert_eq!(flow.mode(), AuthMode::Login);
    assert_eq!(flow.login.draft.email, "ops@example.com");
    assert_eq!(flow.signup.draft.username, "kept");
}

#[test]
fn begin_while_submitting_is_ignored() {
    let mut flow = filled_login();
    assert!(flow.begin_login().is_ok());
    assert_eq!(flow.login.phase, FormPhase::Submitting);
    assert_eq!(flow.begin_login(), Err(AuthOutcome::Ignored));
}

// =============================================================
// Login
// =============================================================

#[tokio::test]
async fn login_success_stores_session_and_navigates() {
    let api = client(MockTransport::new().respond(Method::Post, "/auth/login", 200, serde_json::json!({"token": "abc"})));
    let mut flow = filled_login();

    let outcome = flow.submit_login(&api).await;

    assert_eq!(outcome, AuthOutcome::Navigate(DASHBOARD_ROUTE));
    assert_eq!(flow.login.phase, FormPhase::Success);
    assert_eq!(api.session().get().map(|s| s.token().to_owned()), Some("abc".to_owned()));
}

#[tokio::test]
async fn login_rejection_shows_backend_detail_only() {
    let api = client(MockTransport::new().respond(
        Method::Post,
        "/auth/login",
        401,
        serde_json::json!({"detail": "bad credentials"}),
    ));
    let mut flow = filled_login();

    let outcome = flow.submit_login(&api).await;

    assert_eq!(outcome, AuthOutcome::Failed(vec!["bad credentials".to_owned()]));
    assert_eq!(flow.login.phase.errors(), ["bad credentials".to_owned()]);
    assert!(api.session().get().is_none());
}

#[tokio::test]
async fn invalid_login_makes_no_request() {
    let api = client(MockTransport::new());
    let mut flow = AuthFlow::new();
    flow.login.draft.email = "not-an-email".to_owned();

    let outcome = flow.submit_login(&api).await;

    assert!(matches!(outcome, AuthOutcome::Failed(ref errors) if errors.len() == 2));
    assert_eq!(api.transport().request_count(), 0);
}

#[tokio::test]
async fn unreachable_backend_is_folded_into_failed() {
    let api = client(MockTransport::new().fail(Method::Post, "/auth/login", "connection refused"));
    let mut flow = filled_login();

    let outcome = flow.submit_login(&api).await;

    assert_eq!(
        outcome,
        AuthOutcome::Failed(vec!["Unable to reach the server. Please try again later.".to_owned()])
    );
}

#[tokio::test]
async fn login_error_without_message_uses_generic_text() {
    let api = client(MockTransport::new().respond_raw(Method::Post, "/auth/login", 500, "oops"));
    let mut flow = filled_login();

    let outcome = flow.submit_login(&api).await;

    assert_eq!(outcome, AuthOutcome::Failed(vec![crate::error::GENERIC_FAILURE.to_owned()]));
}

// =============================================================
// SignUp
// =============================================================

#[tokio::test]
async fn valid_signup_makes_exactly_one_request() {
    let api = client(MockTransport::new().respond(
        Method::Post,
        "/auth/register",
        201,
        serde_json::json!({"status": "success", "message": "User created", "data": {"userid": "u1"}}),
    ));
    let mut flow = filled_signup();
    assert!(flow.signup.draft.validate().is_empty());

    let outcome = flow.submit_signup(&api).await;

    assert_eq!(outcome, AuthOutcome::ShowLogin);
    assert_eq!(api.transport().request_count(), 1);
    assert_eq!(flow.mode(), AuthMode::Login);
    assert_eq!(flow.notice(), Some(SIGNUP_NOTICE));
    assert_eq!(flow.login.draft.email, "ada@example.com");
}

#[tokio::test]
async fn signup_with_issued_token_navigates() {
    let api = client(MockTransport::new().respond(
        Method::Post,
        "/auth/register",
        201,
        serde_json::json!({"status": "success", "data": {"jwt_token": "jwt-9"}}),
    ));
    let mut flow = filled_signup();

    assert_eq!(flow.submit_signup(&api).await, AuthOutcome::Navigate(DASHBOARD_ROUTE));
    assert!(api.session().is_authenticated());
}

#[tokio::test]
async fn mismatched_passwords_block_before_network() {
    let api = client(MockTransport::new());
    let mut flow = filled_signup();
    flow.signup.draft.confirm_password = "different1".to_owned();

    let outcome = flow.submit_signup(&api).await;

    let AuthOutcome::Failed(errors) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert!(errors.iter().any(|e| e.contains("do not match")));
    assert_eq!(api.transport().request_count(), 0);
}

#[tokio::test]
async fn signup_field_errors_are_listed() {
    let api = client(MockTransport::new().respond(
        Method::Post,
        "/auth/register",
        400,
        serde_json::json!({"username": {"msg": "Username already taken"}}),
    ));
    let mut flow = filled_signup();

    let outcome = flow.submit_signup(&api).await;

    assert_eq!(outcome, AuthOutcome::Failed(vec!["Username already taken".to_owned()]));
    assert_eq!(flow.mode(), AuthMode::SignUp);
}
