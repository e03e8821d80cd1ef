use axum::extract::FromRef;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// State handed to the plain Axum routes that sit beside the server
/// functions: `/health` and the auth middleware that refreshes clinic
/// staff sessions against the `users` and `refresh_tokens` tables.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: Pool<Postgres>,
}

static POOL: OnceLock<Pool<Postgres>> = OnceLock::new();
static MIGRATED: AtomicBool = AtomicBool::new(false);

/// Pool size from `DATABASE_MAX_CONNECTIONS`; blank or unparseable values
/// fall back to the default.
fn max_connections(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}

/// Build the HealthDesk pool from `DATABASE_URL` (read from `.env` when
/// present). Nothing connects until the first query runs.
pub fn create_pool() -> Pool<Postgres> {
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max = max_connections(std::env::var("DATABASE_MAX_CONNECTIONS").ok().as_deref());

    tracing::debug!(max_connections = max, "creating database pool");
    PgPoolOptions::new()
        .max_connections(max)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(&database_url)
        .expect("DATABASE_URL is not a valid Postgres URL")
}

/// Apply `migrations/` (users, refresh tokens, enquiries).
pub async fn run_migrations(pool: &Pool<Postgres>) {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .expect("Failed to run database migrations");
    MIGRATED.store(true, Ordering::SeqCst);
    tracing::info!("database migrations applied");
}

/// Pool used by server functions, created on first use. Migrations run
/// at most once per process even if `main` never called them.
pub async fn get_db() -> &'static Pool<Postgres> {
    let pool = POOL.get_or_init(create_pool);

    if !MIGRATED.swap(true, Ordering::SeqCst) {
        run_migrations(pool).await;
    }

    pool
}
