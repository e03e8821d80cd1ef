use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use super::jwt;

pub const ACCESS_COOKIE: &str = "hd_access";
pub const REFRESH_COOKIE: &str = "hd_refresh";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN").ok().filter(|d| !d.is_empty())
}

/// HTTP-only, `SameSite=Lax`, whole-site cookie. A zero `max_age` clears it.
fn build_cookie(name: &'static str, value: &str, max_age_seconds: i64) -> Option<HeaderValue> {
    let mut cookie = Cookie::build((name, value))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_seconds))
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }

    match HeaderValue::from_str(&cookie.build().to_string()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(cookie = name, error = %e, "cookie is not a valid header value");
            None
        }
    }
}

pub fn build_access_cookie(token: &str, max_age_minutes: i64) -> Option<HeaderValue> {
    build_cookie(ACCESS_COOKIE, token, max_age_minutes * 60)
}

pub fn build_refresh_cookie(token: &str, max_age_days: i64) -> Option<HeaderValue> {
    build_cookie(REFRESH_COOKIE, token, max_age_days * 86_400)
}

/// Access token from the cookie, or from `Authorization: Bearer` as a fallback.
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, ACCESS_COOKIE) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, REFRESH_COOKIE)
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

pub fn set_auth_cookies(headers: &mut HeaderMap, access_token: &str, refresh_token: &str) {
    let access = build_access_cookie(access_token, jwt::access_token_expiry_minutes());
    let refresh = build_refresh_cookie(refresh_token, jwt::refresh_token_expiry_days());
    for value in [access, refresh].into_iter().flatten() {
        headers.append(header::SET_COOKIE, value);
    }
}

pub fn clear_auth_cookies(headers: &mut HeaderMap) {
    let access = build_cookie(ACCESS_COOKIE, "", 0);
    let refresh = build_cookie(REFRESH_COOKIE, "", 0);
    for value in [access, refresh].into_iter().flatten() {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Cookie change requested by a server function, applied by the middleware.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set {
        access_token: String,
        refresh_token: String,
    },
    Clear,
}

/// Per-request slot the middleware puts in request extensions.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.schedule(action);
        }
    }
}

/// Ask the middleware to set both auth cookies on the response.
pub fn schedule_auth_cookies(access_token: &str, refresh_token: &str) {
    schedule(PendingCookieAction::Set {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
    });
}

/// Ask the middleware to clear both auth cookies on the response.
pub fn schedule_clear_cookies() {
    schedule(PendingCookieAction::Clear);
}
