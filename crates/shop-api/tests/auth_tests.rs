//! Registration, login and token handling over HTTP.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use common::{TestApp, JWT_SECRET};
use shop_security::JwtService;

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let app = TestApp::new().await;

    let first = app.register("alice", "correct-horse").await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert!(first.json()["message"].is_string());

    let second = app.register("Alice", "another-password").await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.json()["error"], "ValidationError");
}

#[tokio::test]
async fn test_registration_never_grants_admin() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "username": "mallory", "password": "mallory-password", "isAdmin": true })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let login = app.login("mallory", "mallory-password").await.json();
    assert_eq!(login["user"]["isAdmin"], false);
}

#[tokio::test]
async fn test_weak_registration_input_is_rejected() {
    let app = TestApp::new().await;

    assert_eq!(app.register("bob", "short").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.register("b", "long-enough-password").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        app.register("<script>", "long-enough-password").await.status,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_login_token_identifies_user() {
    let app = TestApp::new().await;
    app.register("carol", "carol-password").await;

    let response = app.login("carol", "carol-password").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["user"]["username"], "carol");
    assert_eq!(body["user"]["isAdmin"], false);
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());

    let token = body["token"].as_str().unwrap();
    let identity = app.state.auth_service.authenticate(token).unwrap();
    assert_eq!(identity.user_id.to_string(), body["user"]["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.register("dave", "dave-password").await;

    let wrong_password = app.login("dave", "not-daves-password").await;
    let unknown_user = app.login("nobody", "dave-password").await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.json(), unknown_user.json());
}

#[tokio::test]
async fn test_token_accepted_before_expiry_rejected_after() {
    let app = TestApp::new().await;
    app.register("erin", "erin-password").await;
    let login = app.login("erin", "erin-password").await.json();
    let user_id = Uuid::parse_str(login["user"]["id"].as_str().unwrap()).unwrap();

    let jwt = JwtService::new(JWT_SECRET, 3600);
    let fresh = jwt
        .generate_access_token_at(&user_id, Utc::now() - Duration::minutes(59))
        .unwrap();
    let stale = jwt
        .generate_access_token_at(&user_id, Utc::now() - Duration::minutes(61))
        .unwrap();

    let ok = app.request(Method::GET, "/api/users/me", Some(&fresh), None).await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.json()["username"], "erin");

    let expired = app.request(Method::GET, "/api/users/me", Some(&stale), None).await;
    assert_eq!(expired.status, StatusCode::UNAUTHORIZED);
    assert_eq!(expired.json()["message"], "Token expired");
}

#[tokio::test]
async fn test_missing_or_forged_token_is_unauthorized() {
    let app = TestApp::new().await;

    let missing = app.request(Method::GET, "/api/users/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.json()["error"], "Unauthorized");

    let forged = JwtService::new("a-different-secret-that-is-32-bytes-long", 3600)
        .generate_access_token(&Uuid::new_v4())
        .unwrap();
    let response = app.request(Method::GET, "/api/users/me", Some(&forged), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["message"], "Invalid token");
}

#[tokio::test]
async fn test_malformed_json_gets_json_error() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"username\": "))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "ValidationError");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "healthy");
    assert!(response.headers.contains_key("x-request-id"));
}
