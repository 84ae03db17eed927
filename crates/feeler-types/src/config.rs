//! Server configuration shapes.

use serde::{Deserialize, Serialize};

/// Global configuration loaded from `{data_dir}/config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// runnable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Model identifier sent to the generation provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the provider API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key_env() -> String {
    "FEELER_API_KEY".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert!(config.base_url.starts_with("https://"));
        assert_eq!(config.api_key_env, "FEELER_API_KEY");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: GlobalConfig = serde_json::from_str(r#"{"model":"local-8b"}"#).unwrap();
        assert_eq!(config.model, "local-8b");
        assert_eq!(config.api_key_env, "FEELER_API_KEY");
    }
}
