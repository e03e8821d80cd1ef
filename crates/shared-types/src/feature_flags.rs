use serde::{Deserialize, Serialize};

/// Feature flags for optional behavior.
///
/// Loaded from `config.toml` at server startup. Every field defaults to
/// `false`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Allow accounts to be created through the `register` server function.
    #[serde(default)]
    pub registration: bool,
}
