use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;
use tower_http::cors::{Any, CorsLayer};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse {CONFIG_PATH}, using defaults");
        AppConfig::default()
    })
}

/// Read `config.toml` into the process-wide config. Only the first call has
/// an effect. A missing file leaves every flag off and allows any origin.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(features = ?config.features, origins = ?config.cors.origins(), "loaded {CONFIG_PATH}");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "{CONFIG_PATH} not found, using defaults");
            AppConfig::default()
        }
    })
}

/// Loaded config, or defaults if `load_config()` has not run.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

/// CORS layer built from `[cors] allowed_origins`.
///
/// Origins that are not valid header values are skipped.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.cors.allows_any() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<axum::http::HeaderValue> = config
        .cors
        .origins()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}
