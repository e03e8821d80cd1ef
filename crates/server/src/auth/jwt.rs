use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::UserRole;

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

/// Claims carried by both access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub role: UserRole,
    pub exp: i64,
    pub iat: i64,
    /// Keeps two tokens issued in the same second distinct.
    pub jti: String,
    /// `"access"` or `"refresh"`; a token is only accepted as its own type.
    pub typ: String,
}

/// Hex SHA-256 of a raw token. Only this hash is stored server-side.
pub fn hash_token(raw_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").expect("JWT_SECRET must be set")
}

pub fn access_token_expiry_minutes() -> i64 {
    std::env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(15)
}

pub fn refresh_token_expiry_days() -> i64 {
    std::env::var("JWT_REFRESH_TOKEN_EXPIRY_DAYS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(7)
}

fn issue(
    user_id: i64,
    email: &str,
    role: UserRole,
    typ: &str,
    lifetime: Duration,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expires_at = now + lifetime;
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        role,
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
        jti: uuid::Uuid::new_v4().to_string(),
        typ: typ.to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )?;
    Ok((token, expires_at))
}

pub fn create_access_token(
    user_id: i64,
    email: &str,
    role: UserRole,
) -> Result<String, jsonwebtoken::errors::Error> {
    let lifetime = Duration::minutes(access_token_expiry_minutes());
    issue(user_id, email, role, TOKEN_TYPE_ACCESS, lifetime).map(|(token, _)| token)
}

/// Returns the token and its expiry (stored alongside the hash).
pub fn create_refresh_token(
    user_id: i64,
    email: &str,
    role: UserRole,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let lifetime = Duration::days(refresh_token_expiry_days());
    issue(user_id, email, role, TOKEN_TYPE_REFRESH, lifetime)
}

fn validate(token: &str, expected_typ: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )?;
    if token_data.claims.typ != expected_typ {
        return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
    }
    Ok(token_data.claims)
}

pub fn validate_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    validate(token, TOKEN_TYPE_ACCESS)
}

pub fn validate_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    validate(token, TOKEN_TYPE_REFRESH)
}
