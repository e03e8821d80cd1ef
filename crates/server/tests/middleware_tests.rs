//! Integration tests for the auth middleware.
//!
//! No database is needed: none of these requests carries a refresh token
//! that survives signature validation.
//! Run with: `cargo test -p server --features server --test middleware_tests`

#![cfg(feature = "server")]

mod common;

use axum::http::{header, StatusCode};
use common::{send, set_test_secret, test_app};
use pretty_assertions::assert_eq;
use server::auth::jwt;
use shared_types::UserRole;

#[tokio::test]
async fn anonymous_request_passes_through() {
    set_test_secret();
    let app = test_app();

    let (status, cookies, body) = send(&app, "/whoami", &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "anonymous");
    assert!(cookies.is_empty());
}

#[tokio::test]
async fn access_cookie_populates_claims() {
    set_test_secret();
    let app = test_app();
    let token = jwt::create_access_token(7, "dr.chen@clinic.test", UserRole::Doctor).unwrap();
    let cookie = format!("hd_access={token}");

    let (_, cookies, body) = send(&app, "/whoami", &[(header::COOKIE, cookie.as_str())]).await;

    assert_eq!(body, "7:doctor");
    assert!(cookies.is_empty());
}

#[tokio::test]
async fn bearer_header_populates_claims() {
    set_test_secret();
    let app = test_app();
    let token = jwt::create_access_token(3, "ops@clinic.test", UserRole::Admin).unwrap();
    let bearer = format!("Bearer {token}");

    let (_, _, body) = send(&app, "/whoami", &[(header::AUTHORIZATION, bearer.as_str())]).await;

    assert_eq!(body, "3:admin");
}

#[tokio::test]
async fn refresh_token_is_not_accepted_as_access() {
    set_test_secret();
    let app = test_app();
    let (refresh, _) = jwt::create_refresh_token(3, "ops@clinic.test", UserRole::Admin).unwrap();
    let bearer = format!("Bearer {refresh}");

    let (_, _, body) = send(&app, "/whoami", &[(header::AUTHORIZATION, bearer.as_str())]).await;

    assert_eq!(body, "anonymous");
}

#[tokio::test]
async fn garbage_refresh_cookie_is_ignored() {
    set_test_secret();
    let app = test_app();

    let (status, cookies, body) = send(
        &app,
        "/whoami",
        &[(header::COOKIE, "hd_access=expired; hd_refresh=not-a-jwt")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "anonymous");
    assert!(cookies.is_empty());
}

#[tokio::test]
async fn scheduled_clear_expires_both_cookies() {
    set_test_secret();
    let app = test_app();

    let (status, cookies, _) = send(&app, "/clear", &[]).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().any(|c| c.starts_with("hd_access=")));
    assert!(cookies.iter().any(|c| c.starts_with("hd_refresh=")));
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
}

#[tokio::test]
async fn scheduled_set_writes_http_only_cookies() {
    set_test_secret();
    let app = test_app();

    let (_, cookies, _) = send(&app, "/set", &[]).await;

    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().any(|c| c.starts_with("hd_access=new-access")));
    assert!(cookies.iter().any(|c| c.starts_with("hd_refresh=new-refresh")));
    assert!(cookies.iter().all(|c| c.contains("HttpOnly")));
}
