use super::*;
use crate::resource::{Presentation, RemoteResource};
use crate::transport::mock::MockTransport;

// =============================================================
// Helpers
// =============================================================

fn client(transport: MockTransport) -> ApiClient<MockTransport> {
    let config = ApiConfig::new("http://api.test/api/v1").expect("config");
    ApiClient::new(config, Arc::new(SessionStore::in_memory()), transport)
}

fn signed_in(transport: MockTransport) -> ApiClient<MockTransport> {
    let api = client(transport);
    api.session().set("tok-1").expect("set");
    api
}

fn status_envelope(status: &str) -> Value {
    serde_json::json!({"status": "success", "message": "ok", "data": {"status": status}})
}

fn login_request() -> LoginRequest {
    LoginRequest { email: "ops@example.com".to_owned(), password: "hunter22".to_owned() }
}

// =============================================================
// Auth
// =============================================================

#[tokio::test]
async fn login_stores_returned_token() {
    let api = client(MockTransport::new().respond(Method::Post, "/auth/login", 200, serde_json::json!({"token": "abc"})));
    let session = api.login(&login_request()).await.expect("login");
    assert_eq!(session.token(), "abc");
    assert_eq!(api.session().get().map(|s| s.token().to_owned()), Some("abc".to_owned()));
}

#[tokio::test]
async fn login_posts_credentials_without_bearer() {
    let api = signed_in(MockTransport::new().respond(Method::Post, "/auth/login", 200, serde_json::json!({"token": "new"})));
    api.login(&login_request()).await.expect("login");

    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://api.test/api/v1/auth/login");
    assert_eq!(requests[0].bearer, None);
    assert_eq!(
        requests[0].body,
        Some(serde_json::json!({"email": "ops@example.com", "password": "hunter22"}))
    );
}

#[tokio::test]
async fn login_rejection_is_unauthorized_with_detail() {
    let api = client(MockTransport::new().respond(
        Method::Post,
        "/auth/login",
        401,
        serde_json::json!({"detail": "bad credentials"}),
    ));
    let err = api.login(&login_request()).await.expect_err("should fail");
    assert_eq!(err, ApiError::Unauthorized { message: "bad credentials".to_owned() });
    assert!(api.session().get().is_none());
}

#[tokio::test]
async fn login_without_token_is_decode_error() {
    let api = client(MockTransport::new().respond(Method::Post, "/auth/login", 200, serde_json::json!({"ok": true})));
    let err = api.login(&login_request()).await.expect_err("should fail");
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(api.session().get().is_none());
}

#[tokio::test]
async fn register_with_jwt_token_signs_in() {
    let api = client(MockTransport::new().respond(
        Method::Post,
        "/auth/register",
        201,
        serde_json::json!({"status": "success", "data": {"userid": "u1", "jwt_token": "jwt-1"}}),
    ));
    let request = RegisterRequest {
        firstname: "Ada".to_owned(),
        lastname: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        username: "ada".to_owned(),
        password: "analytical".to_owned(),
        confirm_password: "analytical".to_owned(),
    };
    let session = api.register(&request).await.expect("register");
    assert_eq!(session.map(|s| s.token().to_owned()), Some("jwt-1".to_owned()));
}

#[tokio::test]
async fn register_without_token_leaves_session_absent() {
    let api = client(MockTransport::new().respond_raw(Method::Post, "/auth/register", 201, ""));
    let request = RegisterRequest {
        firstname: "A".to_owned(),
        lastname: "B".to_owned(),
        email: "a@b.io".to_owned(),
        username: "ab".to_owned(),
        password: "password1".to_owned(),
        confirm_password: "password1".to_owned(),
    };
    assert_eq!(api.register(&request).await.expect("register"), None);
    assert!(api.session().get().is_none());
}

#[tokio::test]
async fn logout_is_idempotent() {
    let api = signed_in(MockTransport::new());
    api.logout();
    api.logout();
    assert!(api.session().get().is_none());
    assert_eq!(api.transport().request_count(), 0);
}

// =============================================================
// Session handling on reads
// =============================================================

#[tokio::test]
async fn reads_attach_bearer_when_signed_in() {
    let api = signed_in(MockTransport::new().respond(Method::Get, "/tracking/eta", 200, serde_json::json!({"data": {"estimatedTime": "4h"}})));
    let eta = api.eta().await.expect("eta").expect("data");
    assert_eq!(eta.estimated_time.as_deref(), Some("4h"));
    assert_eq!(api.transport().requests()[0].bearer.as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn unauthorized_read_clears_session() {
    let api = signed_in(MockTransport::new().respond(
        Method::Get,
        "/auth/profile",
        401,
        serde_json::json!({"detail": "Could not validate credentials"}),
    ));
    let err = api.profile().await.expect_err("should fail");
    assert!(err.is_unauthorized());
    assert!(api.session().get().is_none());
}

#[tokio::test]
async fn other_failures_keep_session() {
    let api = signed_in(MockTransport::new().respond(Method::Get, "/tracking/orders", 500, serde_json::json!({})));
    let err = api.orders().await.expect_err("should fail");
    assert_eq!(err.status(), Some(500));
    assert!(api.session().get().is_some());
}

// =============================================================
// Envelopes and decoding
// =============================================================

#[tokio::test]
async fn missing_list_data_is_empty_not_error() {
    let api = client(MockTransport::new().respond(
        Method::Get,
        "/tracking/orders",
        200,
        serde_json::json!({"message": "Get orders", "status": "success", "data": null}),
    ));
    assert!(api.orders().await.expect("orders").is_empty());
}

#[tokio::test]
async fn order_lookup_encodes_identifier() {
    let api = client(MockTransport::new().respond(
        Method::Get,
        "/tracking/order/PO%2042",
        200,
        serde_json::json!({"data": {"id": "PO 42", "status": "in_transit"}}),
    ));
    let order = api.order("PO 42").await.expect("order").expect("data");
    assert_eq!(order.status, "in_transit");
    assert_eq!(api.transport().requests()[0].url, "http://api.test/api/v1/tracking/order/PO%2042");
}

#[tokio::test]
async fn model_performance_decodes_metrics() {
    let api = client(MockTransport::new().respond(
        Method::Get,
        "/ai/models/m-1/performance",
        200,
        serde_json::json!({
            "status": "success",
            "message": "ok",
            "data": {"accuracy": 0.91, "precision": 0.88, "recall": 0.86, "f1_score": 0.87},
            "errors": []
        }),
    ));
    let metrics = api.model_performance("m-1").await.expect("perf").expect("data");
    assert!((metrics.f1_score - 0.87).abs() < f64::EPSILON);
}

#[tokio::test]
async fn mismatched_payload_shape_is_decode_error() {
    let api = client(MockTransport::new().respond(
        Method::Get,
        "/ai/models/m-1/performance",
        200,
        serde_json::json!({"status": "success", "data": {"accuracy": "high"}, "errors": []}),
    ));
    let mut resource = RemoteResource::new();
    let ticket = resource.begin();
    let result = api.model_performance("m-1").await;
    assert!(matches!(result, Err(ApiError::Decode(_))));

    resource.commit(ticket, result);
    assert!(matches!(resource.presentation(), Presentation::Failed(_)));
}

#[tokio::test]
async fn dot_segment_identifiers_are_rejected_before_sending() {
    let api = client(MockTransport::new());
    for id in [".", ".."] {
        assert!(matches!(api.order(id).await, Err(ApiError::Validation(_))));
        assert!(matches!(api.model_performance(id).await, Err(ApiError::Validation(_))));
    }
    assert_eq!(api.transport().request_count(), 0);
}

#[tokio::test]
async fn non_json_success_body_is_decode_error() {
    let api = client(MockTransport::new().respond_raw(Method::Get, "/forecast/model/info", 200, "<html>"));
    assert!(matches!(api.model_info().await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn network_failure_is_transport_error() {
    let api = client(MockTransport::new().fail(Method::Get, "/tracking/delays", "connection refused"));
    assert_eq!(
        api.delays().await,
        Err(ApiError::Transport("connection refused".to_owned()))
    );
}

#[tokio::test]
async fn application_error_without_message_gets_generic_text() {
    let api = client(MockTransport::new().respond_raw(Method::Get, "/forecast/trends", 502, "Bad Gateway"));
    assert_eq!(
        api.forecast_trends().await,
        Err(ApiError::Application { status: 502, messages: vec![GENERIC_FAILURE.to_owned()] })
    );
}

// =============================================================
// Aggregate overview
// =============================================================

#[tokio::test]
async fn overview_loads_all_three_parts() {
    let api = client(
        MockTransport::new()
            .respond(Method::Get, "/forecast/demand", 200, status_envelope("active"))
            .respond(Method::Get, "/forecast/trends", 200, status_envelope("rising"))
            .respond(Method::Get, "/forecast/model/status", 200, status_envelope("loaded")),
    );
    let overview = api.overview().await.expect("overview");
    assert_eq!(overview.trends.map(|t| t.status), Some("rising".to_owned()));
    assert_eq!(api.transport().request_count(), 3);
}

#[tokio::test]
async fn overview_fails_when_any_part_fails() {
    let api = client(
        MockTransport::new()
            .respond(Method::Get, "/forecast/demand", 200, status_envelope("active"))
            .respond(Method::Get, "/forecast/trends", 500, serde_json::json!({"detail": "trend service down"}))
            .respond(Method::Get, "/forecast/model/status", 200, status_envelope("loaded")),
    );
    let mut resource = RemoteResource::new();
    let ticket = resource.begin();
    resource.commit(ticket, api.overview().await);

    assert_eq!(resource.presentation(), Presentation::Failed("trend service down"));
    assert!(resource.value().is_none());
    assert_eq!(api.transport().request_count(), 3);
}
