use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

mod common;
use common::Harness;

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "message": "success",
        "status": 200,
        "data": data
    }))
}

#[tokio::test]
async fn attaches_bearer_token_when_signed_in() {
    let harness = Harness::start().await;
    harness.sign_in("token-1").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/verify"))
        .and(header("authorization", "Bearer token-1"))
        .respond_with(ok(json!("user-123")))
        .expect(1)
        .mount(&harness.server)
        .await;

    let envelope = harness.services.auth.verify().await.unwrap();
    assert_eq!(envelope.into_data().as_deref(), Some("user-123"));

    Mock::given(method("GET"))
        .and(path("/api/v1/applications/"))
        .respond_with(ok(json!({ "data": [], "dataCount": 0 })))
        .mount(&harness.server)
        .await;
    harness.services.applications.list(None, None, None).await.unwrap();

    for request in harness.requests().await {
        assert_eq!(
            request.headers.get("authorization").unwrap(),
            "Bearer token-1"
        );
        assert_eq!(
            request.headers.get("content-type").unwrap(),
            "application/json"
        );
    }
}

#[tokio::test]
async fn omits_authorization_without_session() {
    let harness = Harness::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ok(json!("token-1")))
        .mount(&harness.server)
        .await;

    harness
        .services
        .auth
        .login(&api::LoginBody::new("ada@example.com", "hunter22"))
        .await
        .unwrap();

    let requests = harness.requests().await;
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn unauthorized_clears_session_and_fires_hook() {
    let harness = Harness::start().await;
    harness.sign_in("stale-token").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/applications/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "token expired",
            "status": 401
        })))
        .mount(&harness.server)
        .await;

    let err = harness
        .services
        .applications
        .list(None, None, None)
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("token expired"));
    assert!(harness.sessions.read().await.is_none());
    assert_eq!(harness.unauthorized_calls(), 1);
}

#[tokio::test]
async fn unauthorized_without_body_still_expires_session() {
    let harness = Harness::start().await;
    harness.sign_in("stale-token").await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&harness.server)
        .await;

    let err = harness.services.auth.logout().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(harness.sessions.read().await.is_none());
    assert_eq!(harness.unauthorized_calls(), 1);
}

#[tokio::test]
async fn other_errors_keep_session() {
    let harness = Harness::start().await;
    harness.sign_in("token-1").await;

    Mock::given(method("POST"))
        .and(path("/api/v1/applications/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "invalid request body",
            "status": 400,
            "error": [{ "field": "companyName", "tag": "required" }]
        })))
        .mount(&harness.server)
        .await;

    let err = harness
        .services
        .applications
        .create(&api::CreateApplication::default())
        .await
        .unwrap_err();

    match err {
        api::ApiError::Status {
            status,
            message,
            error,
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "invalid request body");
            assert!(error.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(harness.sessions.read().await.is_some());
    assert_eq!(harness.unauthorized_calls(), 0);
}

#[tokio::test]
async fn timeout_surfaces_as_transport_error() {
    let harness = Harness::start_with(|config| config.with_timeout_secs(1)).await;
    harness.sign_in("token-1").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/verify"))
        .respond_with(ok(json!("user-123")).set_delay(Duration::from_secs(3)))
        .mount(&harness.server)
        .await;

    let err = harness.services.auth.verify().await.unwrap_err();
    assert!(err.is_timeout());
    assert!(harness.sessions.read().await.is_some());
    assert_eq!(harness.unauthorized_calls(), 0);
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let harness = Harness::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/applications/options"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&harness.server)
        .await;

    let err = harness.services.applications.get_options().await.unwrap_err();
    assert!(matches!(err, api::ApiError::Decode(_)));
}
