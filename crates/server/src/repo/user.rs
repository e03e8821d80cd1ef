use shared_types::{AppError, AuthUser, UserRole};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Full `users` row, including the password hash. Never sent to clients.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
}

impl UserRow {
    pub fn role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }

    pub fn to_auth_user(&self) -> AuthUser {
        AuthUser {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            role: self.role(),
            is_active: self.is_active,
        }
    }
}

const USER_COLUMNS: &str = "id, email, full_name, password_hash, role, is_active";

/// Look up a user by email (case-insensitive).
pub async fn find_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<UserRow>, AppError> {
    sqlx::query_as::<_, UserRow>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn exists_by_email(pool: &Pool<Postgres>, email: &str) -> Result<bool, AppError> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<UserRow>, AppError> {
    sqlx::query_as::<_, UserRow>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Insert a new user. A duplicate email surfaces as a `Conflict`.
pub async fn create(
    pool: &Pool<Postgres>,
    email: &str,
    full_name: &str,
    password_hash: &str,
    role: UserRole,
) -> Result<UserRow, AppError> {
    sqlx::query_as::<_, UserRow>(&format!(
        r#"
        INSERT INTO users (email, full_name, password_hash, role)
        VALUES ($1, $2, $3, $4)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(email)
    .bind(full_name)
    .bind(password_hash)
    .bind(role.as_str())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn set_role(pool: &Pool<Postgres>, id: i64, role: UserRole) -> Result<(), AppError> {
    sqlx::query("UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .bind(role.as_str())
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}
