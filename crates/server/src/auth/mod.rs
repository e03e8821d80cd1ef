pub mod cookies;
pub mod jwt;
pub mod middleware;
pub mod password;

use shared_types::{AppError, UserRole};
use sqlx::{Pool, Postgres};

use crate::repo;

/// True when `email` matches the `ADMIN_EMAIL` env var, ignoring case.
/// An empty or unset variable matches nothing.
pub fn is_admin_email(email: &str) -> bool {
    match std::env::var("ADMIN_EMAIL") {
        Ok(admin) if !admin.is_empty() => admin.eq_ignore_ascii_case(email),
        _ => false,
    }
}

/// Promote the user to admin if their email matches `ADMIN_EMAIL`.
///
/// Returns the role the user ends up with. A failed update is logged and
/// the current role is kept.
pub async fn maybe_promote_admin(
    db: &Pool<Postgres>,
    user_id: i64,
    email: &str,
    current_role: UserRole,
) -> UserRole {
    if current_role == UserRole::Admin || !is_admin_email(email) {
        return current_role;
    }

    match repo::user::set_role(db, user_id, UserRole::Admin).await {
        Ok(()) => {
            tracing::info!(user_id, email, "promoted user to admin via ADMIN_EMAIL");
            UserRole::Admin
        }
        Err(e) => {
            tracing::error!(user_id, email, error = %e, "failed to promote admin");
            current_role
        }
    }
}

/// Credentials for the admin account created on first start.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

impl AdminSeed {
    pub const FULL_NAME: &'static str = "Admin User";

    /// Read `ADMIN_EMAIL` and `ADMIN_PASSWORD`.
    pub fn from_env() -> Option<Self> {
        Self::from_values(
            std::env::var("ADMIN_EMAIL").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        )
    }

    /// Both values must be present and non-blank.
    pub fn from_values(email: Option<String>, password: Option<String>) -> Option<Self> {
        let email = email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty())?;
        let password = password.filter(|p| !p.trim().is_empty())?;
        Some(Self { email, password })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created { user_id: i64 },
    AlreadyExists,
    NotConfigured,
}

/// Create the default admin account unless it already exists.
///
/// Runs once at startup, after migrations.
pub async fn seed_default_admin(
    db: &Pool<Postgres>,
    seed: Option<&AdminSeed>,
) -> Result<SeedOutcome, AppError> {
    let Some(seed) = seed else {
        tracing::info!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping default admin");
        return Ok(SeedOutcome::NotConfigured);
    };

    if repo::user::exists_by_email(db, &seed.email).await? {
        tracing::info!(email = %seed.email, "admin user already exists");
        return Ok(SeedOutcome::AlreadyExists);
    }

    let password_hash =
        password::hash_password(&seed.password).map_err(|e| AppError::internal(e.to_string()))?;
    let user = repo::user::create(
        db,
        &seed.email,
        AdminSeed::FULL_NAME,
        &password_hash,
        UserRole::Admin,
    )
    .await?;

    tracing::info!(user_id = user.id, email = %seed.email, "created default admin user");
    Ok(SeedOutcome::Created { user_id: user.id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn admin_seed_needs_email_and_password() {
        let seed = AdminSeed::from_values(
            Some(" admin@healthdesk.test ".into()),
            Some("admin123".into()),
        );
        assert_eq!(
            seed,
            Some(AdminSeed {
                email: "admin@healthdesk.test".into(),
                password: "admin123".into(),
            })
        );

        assert_eq!(AdminSeed::from_values(None, Some("admin123".into())), None);
        assert_eq!(AdminSeed::from_values(Some("admin@healthdesk.test".into()), None), None);
        assert_eq!(AdminSeed::from_values(Some("  ".into()), Some("admin123".into())), None);
        assert_eq!(
            AdminSeed::from_values(Some("admin@healthdesk.test".into()), Some("   ".into())),
            None
        );
    }

    #[test]
    fn admin_email_matching() {
        std::env::set_var("ADMIN_EMAIL", "Chief@Clinic.test");
        assert!(is_admin_email("chief@clinic.test"));
        assert!(is_admin_email("CHIEF@CLINIC.TEST"));
        assert!(!is_admin_email("nurse@clinic.test"));

        std::env::set_var("ADMIN_EMAIL", "");
        assert!(!is_admin_email(""));
        assert!(!is_admin_email("chief@clinic.test"));
    }
}
