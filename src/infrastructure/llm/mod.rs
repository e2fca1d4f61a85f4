//! LLM provider implementations

mod http_client;
mod ollama;

pub use http_client::{HttpClient, HttpClientTrait};
pub use ollama::OllamaProvider;
