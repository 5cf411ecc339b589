//! End-to-end authentication flow tests.
//!
//! These exercise the full register -> login -> logout lifecycle over
//! HTTP, plus the store-level atomicity guarantees. They need a running
//! PostgreSQL instance and are `#[ignore]`d; run them with
//! `cargo test -- --ignored` and `DATABASE_URL` pointing at a scratch
//! database.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::{json, Value};

use authd::auth::sessions::{create_session, find_session};
use authd::auth::users::create_user;
use authd::error::AuthError;

use common::{create_test_server, test_pool, unique_email};

const TTL: Duration = Duration::from_secs(60);

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_register_login_logout_flow() {
    let server = create_test_server(TTL).await;
    let email = unique_email();

    // Register: 200, user created, session cookie set.
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Jane Doe",
            "email": email,
            "password": "Secret1_",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "User successfully created");

    // Logout with the registration session: 200.
    let response = server.post("/api/auth/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Logged out successfully");

    // Logout again while anonymous: explicit 401, not a no-op.
    let response = server.post("/api/auth/logout").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    // Login with the same credentials: 200 with user info.
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": "Secret1_" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["email"], email);
    assert!(body["user"].get("password_hash").is_none());

    // And out again.
    let response = server.post("/api/auth/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_register_validation_report() {
    let server = create_test_server(TTL).await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Jane  Doe",
            "email": "not-an-email",
            "password": "short",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["message"]["name"]["valid"], false);
    assert_eq!(body["message"]["email"]["valid"], false);
    assert_eq!(body["message"]["password"]["valid"], false);
    // The password report breaks failures down per rule.
    assert!(body["message"]["password"]["messages"]
        .get("underscore")
        .is_some());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_non_string_field_is_rejected_with_400() {
    let server = create_test_server(TTL).await;

    // A numeric name never reaches the validators; the body is rejected
    // as a client error, not axum's stock 422.
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": 123,
            "email": unique_email(),
            "password": "Secret1_",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_duplicate_registration_is_rejected() {
    let server = create_test_server(TTL).await;
    let email = unique_email();
    let request = json!({
        "name": "Jane Doe",
        "email": email,
        "password": "Secret1_",
    });

    let response = server.post("/api/auth/register").json(&request).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.post("/api/auth/register").json(&request).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_login_failures_are_generic() {
    let server = create_test_server(TTL).await;
    let email = unique_email();

    server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Jane Doe",
            "email": email,
            "password": "Secret1_",
        }))
        .await;

    // Unknown email and wrong password must be indistinguishable.
    let unknown = server
        .post("/api/auth/login")
        .json(&json!({ "email": unique_email(), "password": "Secret1_" }))
        .await;
    let wrong = server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": "Wrong1_x" }))
        .await;

    assert_eq!(unknown.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.json::<Value>(), wrong.json::<Value>());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_login_with_missing_credentials() {
    let server = create_test_server(TTL).await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "jane@doe.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["message"], "Email or Password not present");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_concurrent_duplicate_registration_races() {
    let pool = test_pool().await;
    let email = unique_email();
    let hash = "$2b$04$R3bQHrrjgiXrJJJqveTO9ONyZpDGmqqRl4f3aOQ93B1gVo8LCFq2m";

    let (first, second) = tokio::join!(
        create_user(&pool, "Jane Doe", &email, hash),
        create_user(&pool, "Jane Doe", &email, hash),
    );

    // Exactly one insert wins; the other hits the unique constraint.
    let outcomes = [first, second];
    let successes = outcomes.iter().filter(|r| r.is_ok()).count();
    let duplicates = outcomes
        .iter()
        .filter(|r| matches!(r, Err(AuthError::DuplicateEmail)))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(duplicates, 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_session_expires_after_ttl() {
    let pool = test_pool().await;
    let email = unique_email();
    let hash = "$2b$04$R3bQHrrjgiXrJJJqveTO9ONyZpDGmqqRl4f3aOQ93B1gVo8LCFq2m";

    let user = create_user(&pool, "Jane Doe", &email, hash).await.unwrap();
    let session = create_session(&pool, user.id, Duration::from_millis(200))
        .await
        .unwrap();

    assert!(find_session(&pool, session.id).await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(find_session(&pool, session.id).await.unwrap().is_none());
}
