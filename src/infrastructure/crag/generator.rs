//! Context-grounded answer generator
//!
//! Concatenates the evidence chunks into the system prompt and answers the
//! original query strictly from that context.

use std::sync::Arc;

use tracing::debug;

use crate::domain::crag::CragConfig;
use crate::domain::evidence::EvidenceChunk;
use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::DomainError;

const CONTEXT_DELIMITER: &str = "\n\n---\n\n";

const GENERATOR_RULES: &str = "\
You are a secure document reasoning assistant.
STRICT RULES:
1. USE ONLY the provided context.
2. If the answer is NOT in the context, strictly state: \"I cannot find this information in the provided files.\"
3. Do NOT invent facts. Do NOT use outside knowledge.
4. If the user asks to \"Summarize\", provide a structured summary with bullet points.
5. If the user asks to \"Write content\", provide the raw text verbatim.";

/// Answer generator grounded in retrieved evidence
#[derive(Debug)]
pub struct ContextAnswerGenerator<P>
where
    P: LlmProvider,
{
    provider: Arc<P>,
    config: CragConfig,
}

impl<P: LlmProvider> ContextAnswerGenerator<P> {
    pub fn new(provider: Arc<P>, config: CragConfig) -> Self {
        Self { provider, config }
    }

    /// Generate the final answer for `query` from `chunks`, in the order
    /// given. Attempted exactly once per run; failure surfaces as a
    /// generation error.
    pub async fn generate(
        &self,
        query: &str,
        chunks: &[EvidenceChunk],
    ) -> Result<String, DomainError> {
        debug!(chunks = chunks.len(), "Generating answer");

        let context = chunks
            .iter()
            .map(|c| c.content.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_DELIMITER);

        let system_prompt = format!("{}\n\nCONTEXT FROM FILES:\n{}", GENERATOR_RULES, context);

        let request = LlmRequest::builder()
            .system(system_prompt)
            .user(query)
            .build();

        let response = self
            .provider
            .chat(&self.config.generation_model, request)
            .await
            .map_err(|e| DomainError::generation(e.to_string()))?;

        Ok(response.content().to_string())
    }
}
