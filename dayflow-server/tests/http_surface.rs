//! Transport-level behavior: public routes, token failures, envelope shape

mod common;

use http::StatusCode;

use dayflow_server::api::create_router;
use dayflow_server::auth::{JwtConfig, JwtService};

#[tokio::test]
async fn health_is_public() {
    let state = common::test_state().await;
    let app = create_router(state);

    let (status, body) = common::request(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn garbage_and_foreign_tokens_are_unauthorized() {
    let state = common::test_state().await;
    let app = create_router(state);

    let (status, body) =
        common::request(&app, "GET", "/api/auth/me", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    // Signed with a different secret
    let foreign = JwtService::with_config(JwtConfig {
        secret: "some-other-service-signing-secret-key!".to_string(),
        expiration_minutes: 60,
        issuer: "dayflow-server".to_string(),
        audience: "dayflow-clients".to_string(),
    })
    .generate_token("user:xyz", "spoof@dayflow.com", "Admin")
    .unwrap();

    let (status, _) = common::request(&app, "GET", "/api/auth/me", Some(&foreign), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_tokens_are_reported_as_such() {
    let state = common::test_state().await;

    // Issue a token that is already past its lifetime
    let expired = JwtService::with_config(JwtConfig {
        secret: common::TEST_SECRET.to_string(),
        expiration_minutes: -10,
        issuer: "dayflow-server".to_string(),
        audience: "dayflow-clients".to_string(),
    })
    .generate_token("user:xyz", "late@dayflow.com", "Employee")
    .unwrap();

    let app = create_router(state);
    let (status, body) = common::request(&app, "GET", "/api/auth/me", Some(&expired), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Token expired");
}

#[tokio::test]
async fn validation_failures_use_the_error_envelope() {
    let state = common::test_state().await;
    let app = create_router(state);

    let (status, body) = common::request(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(serde_json::json!({ "email": "not-an-email", "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Please provide a valid email");

    let (status, body) = common::request(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(serde_json::json!({ "email": "short@dayflow.com", "password": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Password must be at least 6 characters");
}
