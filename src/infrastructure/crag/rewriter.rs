//! Query rewriter
//!
//! Invoked when a grading pass rejects every retrieved chunk. A failed or
//! empty rewrite is fatal to the run: retrying retrieval with an unchanged
//! query would spin the retry counter for nothing.

use std::sync::Arc;

use tracing::debug;

use crate::domain::crag::CragConfig;
use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::DomainError;

const REWRITER_SYSTEM_PROMPT: &str = "\
You are a search query optimizer for a document retrieval system. \
The current query did not return relevant results. Rephrase it to be more \
specific and likely to match document content. Return ONLY the rewritten \
query, nothing else.";

/// LLM-backed query reformulator
#[derive(Debug)]
pub struct LlmQueryRewriter<P>
where
    P: LlmProvider,
{
    provider: Arc<P>,
    config: CragConfig,
}

impl<P: LlmProvider> LlmQueryRewriter<P> {
    pub fn new(provider: Arc<P>, config: CragConfig) -> Self {
        Self { provider, config }
    }

    /// Reformulate the query, returning the rewritten text trimmed of
    /// surrounding whitespace.
    pub async fn rewrite(&self, query: &str) -> Result<String, DomainError> {
        let request = LlmRequest::builder()
            .system(REWRITER_SYSTEM_PROMPT)
            .user(format!("Original query: {}", query))
            .temperature(self.config.temperature)
            .build();

        let response = self
            .provider
            .chat(&self.config.rewrite_model, request)
            .await
            .map_err(|e| DomainError::rewrite(e.to_string()))?;

        let rewritten = response.content().trim().to_string();
        if rewritten.is_empty() {
            return Err(DomainError::rewrite("rewriter returned an empty query"));
        }

        debug!(from = query, to = %rewritten, "Query rewritten");
        Ok(rewritten)
    }
}
