use serde::{Deserialize, Serialize};

use crate::FeatureFlags;

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Cross-origin settings for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorsConfig {
    /// `"*"`, a JSON array of origins, or a comma-separated list.
    #[serde(default = "any_origin")]
    pub allowed_origins: String,
}

fn any_origin() -> String {
    "*".to_string()
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: any_origin(),
        }
    }
}

impl CorsConfig {
    /// Expand `allowed_origins` into individual origins.
    ///
    /// A lone `*` is returned as `["*"]`.
    pub fn origins(&self) -> Vec<String> {
        let raw = self.allowed_origins.trim();
        if raw == "*" {
            return vec!["*".to_string()];
        }
        if let Ok(list) = serde_json::from_str::<Vec<String>>(raw) {
            return list;
        }
        raw.split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn allows_any(&self) -> bool {
        self.origins().iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.cors.allows_any());
        assert!(!config.features.registration);
    }

    #[test]
    fn partial_toml_keeps_missing_sections_default() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            registration = true
            "#,
        )
        .unwrap();
        assert!(config.features.registration);
        assert_eq!(config.cors, CorsConfig::default());
    }

    #[test]
    fn origins_from_json_list() {
        let cors = CorsConfig {
            allowed_origins: r#"["http://localhost:5173", "https://desk.example.org"]"#.into(),
        };
        assert_eq!(
            cors.origins(),
            vec!["http://localhost:5173", "https://desk.example.org"]
        );
        assert!(!cors.allows_any());
    }

    #[test]
    fn origins_from_comma_list() {
        let cors = CorsConfig {
            allowed_origins: " http://a.test , http://b.test,, ".into(),
        };
        assert_eq!(cors.origins(), vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn origins_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [cors]
            allowed_origins = "http://localhost:8080"
            "#,
        )
        .unwrap();
        assert_eq!(config.cors.origins(), vec!["http://localhost:8080"]);
    }
}
