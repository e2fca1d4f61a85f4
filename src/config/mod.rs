mod app_config;

pub use app_config::{EngineConfig, LogFormat, LoggingConfig, OllamaConfig};
