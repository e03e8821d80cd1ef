use chrono::{DateTime, Utc};
use shared_types::AppError;
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

#[derive(Debug, sqlx::FromRow)]
pub struct StoredRefreshToken {
    pub id: i64,
    pub revoked: bool,
}

/// Persist the SHA-256 hash of a freshly issued refresh token.
pub async fn insert(
    pool: &Pool<Postgres>,
    user_id: i64,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}

pub async fn find(
    pool: &Pool<Postgres>,
    user_id: i64,
    token_hash: &str,
) -> Result<Option<StoredRefreshToken>, AppError> {
    sqlx::query_as::<_, StoredRefreshToken>(
        "SELECT id, revoked FROM refresh_tokens WHERE token_hash = $1 AND user_id = $2",
    )
    .bind(token_hash)
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn revoke(pool: &Pool<Postgres>, id: i64) -> Result<(), AppError> {
    sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}

/// Revoke every live refresh token for a user (logout from all devices).
pub async fn revoke_all_for_user(pool: &Pool<Postgres>, user_id: i64) -> Result<u64, AppError> {
    let result =
        sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE user_id = $1 AND revoked = FALSE")
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;
    Ok(result.rows_affected())
}

/// Drop tokens that expired more than an hour ago.
pub async fn purge_expired(pool: &Pool<Postgres>) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < NOW() - INTERVAL '1 hour'")
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(result.rows_affected())
}
