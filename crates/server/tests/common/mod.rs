use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware,
    routing::get,
    Router,
};
use server::auth::cookies::{CookieSlot, PendingCookieAction};
use server::auth::jwt::Claims;
use server::db::AppState;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "healthdesk-integration-secret";

pub fn set_test_secret() {
    std::env::set_var("JWT_SECRET", TEST_SECRET);
}

/// State whose pool never connects. The routes under test only reach the
/// database when a refresh token passes signature validation.
pub fn offline_state() -> AppState {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(std::time::Duration::from_millis(200))
        .connect_lazy("postgres://healthdesk@127.0.0.1:1/unreachable")
        .expect("lazy pool");
    AppState { pool }
}

/// Echo the authenticated user id, or `anonymous`.
async fn whoami(req: Request) -> String {
    match req.extensions().get::<Claims>() {
        Some(claims) => format!("{}:{}", claims.sub, claims.role),
        None => "anonymous".to_string(),
    }
}

async fn schedule_clear(req: Request) -> StatusCode {
    if let Some(slot) = req.extensions().get::<CookieSlot>() {
        slot.schedule(PendingCookieAction::Clear);
    }
    StatusCode::NO_CONTENT
}

async fn schedule_set(req: Request) -> StatusCode {
    if let Some(slot) = req.extensions().get::<CookieSlot>() {
        slot.schedule(PendingCookieAction::Set {
            access_token: "new-access".into(),
            refresh_token: "new-refresh".into(),
        });
    }
    StatusCode::NO_CONTENT
}

/// Router with the auth middleware in front of a few echo handlers.
pub fn test_app() -> Router {
    let state = offline_state();
    Router::new()
        .route("/whoami", get(whoami))
        .route("/clear", get(schedule_clear))
        .route("/set", get(schedule_set))
        .layer(middleware::from_fn_with_state(
            state,
            server::auth::middleware::auth_middleware,
        ))
}

/// Send a GET with optional extra headers; returns status, Set-Cookie values
/// and body.
pub async fn send(
    app: &Router,
    uri: &str,
    headers: &[(header::HeaderName, &str)],
) -> (StatusCode, Vec<String>, String) {
    let mut builder = axum::http::Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(name, *value);
    }
    let req = builder.body(Body::empty()).unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let set_cookies = set_cookie_values(response.headers());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, set_cookies, String::from_utf8_lossy(&body).to_string())
}

fn set_cookie_values(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}
