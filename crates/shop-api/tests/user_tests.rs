//! User management and the caller's own profile over HTTP.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use common::{TestApp, ADMIN_USERNAME};

async fn user_id(app: &TestApp, token: &str) -> String {
    let me = app.request(Method::GET, "/api/users/me", Some(token), None).await;
    assert_eq!(me.status, StatusCode::OK);
    me.json()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_me_returns_own_profile() {
    let app = TestApp::new().await;
    let token = app.user_token("frank").await;

    let me = app.request(Method::GET, "/api/users/me", Some(&token), None).await.json();
    assert_eq!(me["username"], "frank");
    assert_eq!(me["isAdmin"], false);
    assert!(me.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_user_management_requires_admin() {
    let app = TestApp::new().await;
    let token = app.user_token("grace").await;
    let id = user_id(&app, &token).await;

    let list = app.request(Method::GET, "/api/users", Some(&token), None).await;
    assert_eq!(list.status, StatusCode::FORBIDDEN);

    let promote = app
        .request(
            Method::PUT,
            &format!("/api/users/update-user-admin/{id}"),
            Some(&token),
            Some(json!({ "isAdmin": true })),
        )
        .await;
    assert_eq!(promote.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_lists_users_without_secrets() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    app.user_token("heidi").await;

    let list = app.request(Method::GET, "/api/users", Some(&admin), None).await;
    assert_eq!(list.status, StatusCode::OK);

    let users = list.json();
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("passwordHash").is_none() && u.get("password").is_none()));
    assert!(users.iter().any(|u| u["username"] == ADMIN_USERNAME && u["isAdmin"] == true));
}

#[tokio::test]
async fn test_admin_toggle_takes_effect_immediately() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let token = app.user_token("ivan").await;
    let id = user_id(&app, &token).await;

    let promoted = app
        .request(
            Method::PUT,
            &format!("/api/users/update-user-admin/{id}"),
            Some(&admin),
            Some(json!({ "isAdmin": true })),
        )
        .await;
    assert_eq!(promoted.status, StatusCode::OK);
    assert_eq!(promoted.json()["isAdmin"], true);

    // Same token, new rights
    let create = app
        .request(Method::POST, "/api/products", Some(&token), Some(json!({ "name": "Pen", "price": 1.0 })))
        .await;
    assert_eq!(create.status, StatusCode::CREATED);

    app.request(
        Method::PUT,
        &format!("/api/users/update-user-admin/{id}"),
        Some(&admin),
        Some(json!({ "isAdmin": false })),
    )
    .await;
    let create = app
        .request(Method::POST, "/api/products", Some(&token), Some(json!({ "name": "Pen", "price": 1.0 })))
        .await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_cannot_lock_themselves_out() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let id = user_id(&app, &admin).await;

    let demote = app
        .request(
            Method::PUT,
            &format!("/api/users/update-user-admin/{id}"),
            Some(&admin),
            Some(json!({ "isAdmin": false })),
        )
        .await;
    assert_eq!(demote.status, StatusCode::BAD_REQUEST);

    let delete = app.request(Method::DELETE, &format!("/api/users/{id}"), Some(&admin), None).await;
    assert_eq!(delete.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_crud_on_users() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let created = app
        .request(
            Method::POST,
            "/api/users",
            Some(&admin),
            Some(json!({ "username": "judy", "password": "judy-password", "isAdmin": true })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let created = created.json();
    assert_eq!(created["isAdmin"], true);
    let id = created["id"].as_str().unwrap().to_string();

    let renamed = app
        .request(
            Method::PUT,
            &format!("/api/users/{id}"),
            Some(&admin),
            Some(json!({ "username": "judy.b" })),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.json()["username"], "judy.b");

    let fetched = app.request(Method::GET, &format!("/api/users/{id}"), Some(&admin), None).await;
    assert_eq!(fetched.json()["username"], "judy.b");

    let deleted = app.request(Method::DELETE, &format!("/api/users/{id}"), Some(&admin), None).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let again = app.request(Method::DELETE, &format!("/api/users/{id}"), Some(&admin), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_users_are_not_found() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let random = format!("/api/users/{}", Uuid::new_v4());
    for path in [random.as_str(), "/api/users/not-a-uuid"] {
        assert_eq!(app.request(Method::GET, path, Some(&admin), None).await.status, StatusCode::NOT_FOUND);
        assert_eq!(
            app.request(Method::DELETE, path, Some(&admin), None).await.status,
            StatusCode::NOT_FOUND
        );
    }
}

#[tokio::test]
async fn test_deleted_user_token_no_longer_resolves() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let token = app.user_token("kim").await;
    let id = user_id(&app, &token).await;

    app.request(Method::DELETE, &format!("/api/users/{id}"), Some(&admin), None).await;

    let me = app.request(Method::GET, "/api/users/me", Some(&token), None).await;
    assert_eq!(me.status, StatusCode::NOT_FOUND);
}
