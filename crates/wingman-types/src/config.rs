//! Application configuration shape.
//!
//! Deserialized from `{data_dir}/config.toml` by the infra loader.
//! Every field has a default so a partial (or absent) file still yields a
//! usable configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

/// Model settings shared by both front-ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Upper bound on generated tokens per response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.max_tokens, 1024);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"model":"llama-3.1-8b-instant"}"#).unwrap();
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.max_tokens, 1024);
    }
}
