use thiserror::Error;

/// Core domain errors
///
/// Retrieval, rewrite and generation failures are structural and abort the
/// run. Grading transport failures never appear here: the grader absorbs
/// them with a default-to-relevant verdict.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Retrieval unavailable: {message}")]
    RetrievalUnavailable { message: String },

    #[error("Query rewrite failed: {message}")]
    Rewrite { message: String },

    #[error("Answer generation failed: {message}")]
    Generation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Run cancelled")]
    Cancelled,
}

impl DomainError {
    pub fn retrieval_unavailable(message: impl Into<String>) -> Self {
        Self::RetrievalUnavailable {
            message: message.into(),
        }
    }

    pub fn rewrite(message: impl Into<String>) -> Self {
        Self::Rewrite {
            message: message.into(),
        }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this error is the cancellation outcome
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
