use serde::{Deserialize, Serialize};

use super::Message;

/// Requested response format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmResponseFormat {
    /// Free-form text
    #[default]
    Text,
    /// Force the provider to emit a single JSON object. Used by the grader
    /// so malformed output fails at parse time instead of hanging.
    JsonObject,
}

/// Parameters for a judge or generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub response_format: LlmResponseFormat,
}

impl LlmRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            temperature: None,
            max_tokens: None,
            response_format: LlmResponseFormat::Text,
        }
    }

    pub fn builder() -> LlmRequestBuilder {
        LlmRequestBuilder::new()
    }

    /// Check if this request forces structured output
    pub fn is_structured(&self) -> bool {
        self.response_format == LlmResponseFormat::JsonObject
    }
}

/// Builder for LlmRequest
#[derive(Debug, Default)]
pub struct LlmRequestBuilder {
    messages: Vec<Message>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    response_format: LlmResponseFormat,
}

impl LlmRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn system(self, content: impl Into<String>) -> Self {
        self.message(Message::system(content))
    }

    pub fn user(self, content: impl Into<String>) -> Self {
        self.message(Message::user(content))
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    pub fn response_format(mut self, format: LlmResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    pub fn json_object(self) -> Self {
        self.response_format(LlmResponseFormat::JsonObject)
    }

    pub fn build(self) -> LlmRequest {
        LlmRequest {
            messages: self.messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            response_format: self.response_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = LlmRequest::builder()
            .system("You are a relevance grader")
            .user("USER QUERY: hello")
            .temperature(0.0)
            .max_tokens(150)
            .json_object()
            .build();

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.temperature, Some(0.0));
        assert_eq!(request.max_tokens, Some(150));
        assert!(request.is_structured());
    }

    #[test]
    fn test_request_defaults_to_text() {
        let request = LlmRequest::builder().user("Hello").build();
        assert_eq!(request.response_format, LlmResponseFormat::Text);
        assert!(!request.is_structured());
    }
}
