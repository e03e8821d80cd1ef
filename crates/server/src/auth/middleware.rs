use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use sqlx::{Pool, Postgres};

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::{self, hash_token, validate_access_token, validate_refresh_token};
use crate::repo;

/// Permissive auth middleware.
///
/// Validates the access token (cookie or Bearer header) and puts its `Claims`
/// into request extensions. A missing or invalid access token triggers a
/// transparent refresh from the refresh cookie, rotating both tokens. Server
/// functions schedule cookie changes through the inserted [`CookieSlot`],
/// which is applied to the response here.
///
/// Nothing is rejected: handlers decide what needs a signed-in user.
pub async fn auth_middleware(
    State(pool): State<Pool<Postgres>>,
    mut req: Request,
    next: Next,
) -> Response {
    let headers = req.headers().clone();
    let mut refreshed: Option<(String, String)> = None;

    let access_token = cookies::extract_access_token(&headers);
    let mut needs_refresh = access_token.is_none();

    if let Some(token) = access_token {
        match validate_access_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(_) => needs_refresh = true,
        }
    }

    if needs_refresh {
        if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
            refreshed = try_transparent_refresh(&pool, &refresh_token, &mut req).await;
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some((access, refresh)) = refreshed {
        cookies::set_auth_cookies(response.headers_mut(), &access, &refresh);
    }

    // Scheduled actions run last so a logout wins over a refresh.
    match cookie_slot.take() {
        Some(PendingCookieAction::Set {
            access_token,
            refresh_token,
        }) => cookies::set_auth_cookies(response.headers_mut(), &access_token, &refresh_token),
        Some(PendingCookieAction::Clear) => cookies::clear_auth_cookies(response.headers_mut()),
        None => {}
    }

    response
}

/// Rotate the refresh token and insert fresh `Claims` into the request.
///
/// The role is re-read from the database so role changes apply on the next
/// refresh. Inactive or deleted users are not refreshed.
async fn try_transparent_refresh(
    pool: &Pool<Postgres>,
    refresh_token: &str,
    req: &mut Request,
) -> Option<(String, String)> {
    let claims = validate_refresh_token(refresh_token).ok()?;

    let stored = repo::refresh_token::find(pool, claims.sub, &hash_token(refresh_token))
        .await
        .ok()
        .flatten()?;
    if stored.revoked {
        tracing::debug!(user_id = claims.sub, "refresh token already revoked");
        return None;
    }

    if let Err(e) = repo::refresh_token::revoke(pool, stored.id).await {
        tracing::warn!(user_id = claims.sub, error = %e, "failed to revoke rotated refresh token");
    }

    let user = repo::user::find_by_id(pool, claims.sub).await.ok().flatten()?;
    if !user.is_active {
        return None;
    }

    let new_access = jwt::create_access_token(user.id, &user.email, user.role()).ok()?;
    let (new_refresh, expires_at) =
        jwt::create_refresh_token(user.id, &user.email, user.role()).ok()?;

    repo::refresh_token::insert(pool, user.id, &hash_token(&new_refresh), expires_at)
        .await
        .ok()?;

    let new_claims = validate_access_token(&new_access).ok()?;
    req.extensions_mut().insert(new_claims);

    tracing::debug!(user_id = user.id, "transparently refreshed session");
    Some((new_access, new_refresh))
}
