use async_trait::async_trait;
use std::fmt::Debug;

use super::{LlmRequest, LlmResponse};
use crate::domain::DomainError;

/// Trait for LLM providers (Ollama, or any chat-completion backend)
///
/// A single provider serves the grader, the rewriter and the generator,
/// each addressing its own model.
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send a chat completion request
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::llm::Message;
    use std::collections::{HashMap, VecDeque};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock LLM provider for testing
    ///
    /// Responses are queued per model name, so one mock can serve the
    /// grader, rewriter and generator in a single orchestrator test.
    #[derive(Debug)]
    pub struct MockLlmProvider {
        name: &'static str,
        queues: Mutex<HashMap<String, VecDeque<String>>>,
        default_content: Option<String>,
        model_errors: Mutex<HashMap<String, String>>,
        error: Option<String>,
        chat_count: AtomicUsize,
    }

    impl MockLlmProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                queues: Mutex::new(HashMap::new()),
                default_content: None,
                model_errors: Mutex::new(HashMap::new()),
                error: None,
                chat_count: AtomicUsize::new(0),
            }
        }

        /// Content returned when no queued response matches the model
        pub fn with_default_content(mut self, content: impl Into<String>) -> Self {
            self.default_content = Some(content.into());
            self
        }

        /// Queue a response for a specific model; consumed in FIFO order
        pub fn with_queued_content(
            self,
            model: impl Into<String>,
            content: impl Into<String>,
        ) -> Self {
            self.queues
                .lock()
                .unwrap()
                .entry(model.into())
                .or_default()
                .push_back(content.into());
            self
        }

        /// Fail every call
        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        /// Fail calls addressed to a specific model
        pub fn with_model_error(self, model: impl Into<String>, error: impl Into<String>) -> Self {
            self.model_errors
                .lock()
                .unwrap()
                .insert(model.into(), error.into());
            self
        }

        /// Number of chat calls issued
        pub fn chat_count(&self) -> usize {
            self.chat_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        async fn chat(
            &self,
            model: &str,
            _request: LlmRequest,
        ) -> Result<LlmResponse, DomainError> {
            self.chat_count.fetch_add(1, Ordering::SeqCst);

            if let Some(ref error) = self.error {
                return Err(DomainError::provider(self.name, error));
            }
            if let Some(error) = self.model_errors.lock().unwrap().get(model) {
                return Err(DomainError::provider(self.name, error));
            }

            let queued = self
                .queues
                .lock()
                .unwrap()
                .get_mut(model)
                .and_then(|q| q.pop_front());

            let content = queued
                .or_else(|| self.default_content.clone())
                .ok_or_else(|| {
                    DomainError::provider(
                        self.name,
                        format!("No mock response configured for model '{}'", model),
                    )
                })?;

            Ok(LlmResponse::new(
                "mock-resp".to_string(),
                model.to_string(),
                Message::assistant(content),
            ))
        }

        fn provider_name(&self) -> &'static str {
            self.name
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_queued_responses_per_model() {
            let provider = MockLlmProvider::new("mock")
                .with_queued_content("grader", "first")
                .with_queued_content("grader", "second")
                .with_queued_content("writer", "other");

            let req = || LlmRequest::builder().user("q").build();
            assert_eq!(provider.chat("grader", req()).await.unwrap().content(), "first");
            assert_eq!(provider.chat("writer", req()).await.unwrap().content(), "other");
            assert_eq!(provider.chat("grader", req()).await.unwrap().content(), "second");
            assert_eq!(provider.chat_count(), 3);
        }

        #[tokio::test]
        async fn test_mock_default_content_fallback() {
            let provider = MockLlmProvider::new("mock").with_default_content("fallback");
            let response = provider
                .chat("anything", LlmRequest::builder().user("q").build())
                .await
                .unwrap();
            assert_eq!(response.content(), "fallback");
        }

        #[tokio::test]
        async fn test_mock_error() {
            let provider = MockLlmProvider::new("mock").with_error("API down");
            let result = provider
                .chat("model", LlmRequest::builder().user("q").build())
                .await;
            assert!(result.is_err());
        }

        #[tokio::test]
        async fn test_mock_unconfigured_model_fails() {
            let provider = MockLlmProvider::new("mock");
            let result = provider
                .chat("unknown", LlmRequest::builder().user("q").build())
                .await;
            assert!(result.is_err());
        }
    }
}
