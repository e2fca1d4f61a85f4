use serde::Deserialize;
use std::time::Duration;

use crate::domain::CragConfig;

/// Engine configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub crag: CragConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    pub base_url: String,
    /// Per-request timeout in seconds for provider calls
    pub timeout_secs: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            timeout_secs: 120,
        }
    }
}

impl OllamaConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl EngineConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("ENGINE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        assert_eq!(config.crag.max_retries, 2);
    }

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"ollama": {"base_url": "http://remote:11434", "timeout_secs": 10}}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.ollama.base_url, "http://remote:11434");
        assert_eq!(config.ollama.timeout(), Duration::from_secs(10));
        // Untouched sections keep their defaults
        assert_eq!(config.crag.fusion.semantic_weight, 0.7);
    }
}
