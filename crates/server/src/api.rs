use dioxus::prelude::*;
use shared_types::{AuthUser, Enquiry, UserRole};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::repo;

// ── Auth helpers for server functions ──────────────────

/// Identity of the caller for the current request.
///
/// Prefers the `Claims` the auth middleware validated, falling back to the
/// access token in cookies or the `Authorization` header.
#[cfg(feature = "server")]
pub fn require_auth() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use crate::auth::{cookies, jwt};
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Ok(claims.clone());
    }

    let token = cookies::extract_access_token(&parts.headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    jwt::validate_access_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token").into_server_fn_error())
}

/// Issue an access/refresh pair for `user`, persist the refresh hash and
/// schedule both cookies on the response.
#[cfg(feature = "server")]
async fn start_session(
    db: &sqlx::PgPool,
    user_id: i64,
    email: &str,
    role: UserRole,
) -> Result<(), ServerFnError> {
    use crate::auth::{cookies, jwt};
    use shared_types::AppError;

    let access_token = jwt::create_access_token(user_id, email, role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    let (refresh_token, expires_at) = jwt::create_refresh_token(user_id, email, role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    repo::refresh_token::insert(db, user_id, &jwt::hash_token(&refresh_token), expires_at)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    cookies::schedule_auth_cookies(&access_token, &refresh_token);
    Ok(())
}

/// Load the `AuthUser` for `user_id`. A missing or deactivated user clears
/// the auth cookies and yields `None`.
#[cfg(feature = "server")]
async fn fetch_auth_user(user_id: i64) -> Result<Option<AuthUser>, ServerFnError> {
    let db = get_db().await;
    let user = repo::user::find_by_id(db, user_id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    match user {
        Some(row) if row.is_active => Ok(Some(row.to_auth_user())),
        _ => {
            tracing::debug!(user_id, "session refers to a missing or inactive user");
            crate::auth::cookies::schedule_clear_cookies();
            Ok(None)
        }
    }
}

// ── Server functions ───────────────────────────────────

/// Sign in with email and password. Sets the auth cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::password as pw;
    use shared_types::{AppError, LoginRequest};

    let req = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let Some(user) = repo::user::find_by_email(db, &req.email)
        .await
        .map_err(|e| e.into_server_fn_error())?
    else {
        tracing::warn!(email = %req.email, "login for unknown email");
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    };

    let valid = pw::verify_password(&req.password, &user.password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    if !valid {
        tracing::warn!(user_id = user.id, "login with wrong password");
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    if !user.is_active {
        tracing::warn!(user_id = user.id, "login to inactive account");
        return Err(AppError::forbidden("User account is inactive").into_server_fn_error());
    }

    let role = crate::auth::maybe_promote_admin(db, user.id, &user.email, user.role()).await;
    start_session(db, user.id, &user.email, role).await?;

    tracing::info!(user_id = user.id, role = %role, "user signed in");
    Ok(AuthUser {
        role,
        ..user.to_auth_user()
    })
}

/// Create an account. Only available when `features.registration` is on.
/// The new user is not signed in.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn register(
    email: String,
    password: String,
    full_name: String,
    role: UserRole,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::password as pw;
    use shared_types::{AppError, RegisterRequest};

    if !crate::config::feature_flags().registration {
        return Err(AppError::forbidden("Registration is disabled").into_server_fn_error());
    }

    let req = RegisterRequest {
        email: email.trim().to_string(),
        password,
        full_name: full_name.trim().to_string(),
        role,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let password_hash = pw::hash_password(&req.password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let db = get_db().await;
    let user = repo::user::create(db, &req.email, &req.full_name, &password_hash, req.role)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(user_id = user.id, role = %req.role, "registered user");
    Ok(user.to_auth_user())
}

/// The signed-in user, or `None` when there is no valid session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::{cookies, jwt};

    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        tracing::debug!("no request context available");
        return Ok(None);
    };

    let (claims, headers) = {
        let parts = ctx.parts_mut();
        (parts.extensions.get::<jwt::Claims>().cloned(), parts.headers.clone())
    };

    if let Some(claims) = claims {
        return fetch_auth_user(claims.sub).await;
    }

    if let Some(token) = cookies::extract_access_token(&headers) {
        if let Ok(claims) = jwt::validate_access_token(&token) {
            return fetch_auth_user(claims.sub).await;
        }
    }

    if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
        if let Ok(claims) = jwt::validate_refresh_token(&refresh_token) {
            let db = get_db().await;
            let stored = repo::refresh_token::find(db, claims.sub, &jwt::hash_token(&refresh_token))
                .await
                .map_err(|e| e.into_server_fn_error())?;

            if stored.is_some_and(|row| !row.revoked) {
                return fetch_auth_user(claims.sub).await;
            }
        }
    }

    Ok(None)
}

/// Revoke the caller's refresh tokens and clear the auth cookies.
///
/// Succeeds even without a session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::cookies;

    if let Ok(claims) = require_auth() {
        let db = get_db().await;
        match repo::refresh_token::revoke_all_for_user(db, claims.sub).await {
            Ok(revoked) => tracing::info!(user_id = claims.sub, revoked, "user signed out"),
            Err(e) => tracing::warn!(user_id = claims.sub, error = %e, "failed to revoke refresh tokens"),
        }
    }

    cookies::schedule_clear_cookies();
    Ok(())
}

// ── Patient enquiries ──────────────────────────────────

/// Submit a patient enquiry. Open to anonymous visitors.
#[cfg_attr(feature = "server", tracing::instrument(skip(message)))]
#[server]
pub async fn create_enquiry(
    patient_name: String,
    patient_email: String,
    patient_phone: String,
    subject: String,
    message: String,
) -> Result<Enquiry, ServerFnError> {
    use shared_types::EnquiryCreate;

    let req = EnquiryCreate {
        patient_name: patient_name.trim().to_string(),
        patient_email: patient_email.trim().to_string(),
        patient_phone: patient_phone.trim().to_string(),
        subject: subject.trim().to_string(),
        message,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let row = repo::enquiry::create(db, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(enquiry_id = row.id, "enquiry received");
    Ok(row.to_enquiry())
}

/// All enquiries, newest first. Requires a signed-in user.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_enquiries() -> Result<Vec<Enquiry>, ServerFnError> {
    require_auth()?;

    let db = get_db().await;
    let rows = repo::enquiry::list(db)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(rows.iter().map(|row| row.to_enquiry()).collect())
}

/// One enquiry by id. A malformed id is a `BadRequest`, an unknown one `NotFound`.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_enquiry(id: String) -> Result<Enquiry, ServerFnError> {
    use shared_types::AppError;

    require_auth()?;
    let id = repo::enquiry::parse_id(&id).map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    repo::enquiry::find_by_id(db, id)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .map(|row| row.to_enquiry())
        .ok_or_else(|| AppError::not_found("Enquiry not found").into_server_fn_error())
}
