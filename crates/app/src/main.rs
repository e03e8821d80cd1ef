use dioxus::prelude::*;

mod auth;
mod components;
mod routes;
use auth::{use_session_resolver, SessionState};
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Interval between sweeps of expired refresh tokens.
#[cfg(feature = "server")]
const TOKEN_PURGE_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60 * 60);

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();
        server::health::record_start_time();

        let pool = server::db::create_pool();
        server::db::run_migrations(&pool).await;

        let admin_seed = server::auth::AdminSeed::from_env();
        if let Err(e) = server::auth::seed_default_admin(&pool, admin_seed.as_ref()).await {
            tracing::error!(error = %e, "failed to seed default admin");
        }

        let purge_pool = pool.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TOKEN_PURGE_INTERVAL);
            loop {
                interval.tick().await;
                match server::repo::refresh_token::purge_expired(&purge_pool).await {
                    Ok(0) => {}
                    Ok(purged) => tracing::info!(purged, "purged expired refresh tokens"),
                    Err(e) => tracing::warn!(error = %e, "refresh token purge failed"),
                }
            }
        });

        let state = server::db::AppState { pool };

        let router = dioxus::server::router(App)
            .merge(server::health::router(state.clone()))
            .layer(axum::middleware::from_fn_with_state(
                state,
                server::auth::middleware::auth_middleware,
            ))
            .layer(server::config::cors_layer(config))
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);
    use_session_resolver();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Title { "HealthDesk" }
        Router::<Route> {}
    }
}
