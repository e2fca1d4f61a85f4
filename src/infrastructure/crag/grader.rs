//! LLM-based relevance grader
//!
//! Issues one structured judge call per retrieved chunk. Any transport
//! failure, timeout or schema violation defaults that chunk to relevant:
//! losing evidence to an infrastructure hiccup is worse than passing an
//! irrelevant chunk to generation.

use std::sync::Arc;

use futures::future::join_all;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::crag::{CragConfig, GradeOutcome, GradeVerdict};
use crate::domain::evidence::EvidenceChunk;
use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::DomainError;

const GRADER_SYSTEM_PROMPT: &str = "\
You are a relevance grader. Given a USER QUERY and a DOCUMENT CHUNK, \
decide if the chunk contains information useful for answering the query.

Respond ONLY with a JSON object in this exact format (no markdown, no extra text):
{\"is_relevant\": true or false, \"reason\": \"one sentence explanation\"}";

/// Verdict schema the judge must conform to
#[derive(Debug, Deserialize)]
struct GradeResponse {
    is_relevant: bool,
    reason: String,
}

/// Relevance grader backed by an LLM judge
#[derive(Debug)]
pub struct LlmRelevanceGrader<P>
where
    P: LlmProvider,
{
    provider: Arc<P>,
    config: CragConfig,
}

impl<P: LlmProvider> LlmRelevanceGrader<P> {
    pub fn new(provider: Arc<P>, config: CragConfig) -> Self {
        Self { provider, config }
    }

    /// Grade every chunk against the current query.
    ///
    /// Judge calls fan out concurrently; the returned log preserves input
    /// order, and `relevant` keeps passing chunks in input order. Never
    /// fails: per-chunk failures become default-relevant verdicts.
    pub async fn grade(&self, query: &str, chunks: &[EvidenceChunk]) -> GradeOutcome {
        debug!(count = chunks.len(), "Grading retrieved chunks");

        let verdicts = join_all(chunks.iter().map(|chunk| self.grade_chunk(query, chunk))).await;

        let mut relevant = Vec::new();
        let mut log = Vec::with_capacity(verdicts.len());

        for (chunk, verdict) in chunks.iter().zip(verdicts) {
            if verdict.is_relevant {
                relevant.push(chunk.clone());
            }
            log.push(verdict);
        }

        debug!(
            relevant = relevant.len(),
            total = log.len(),
            "Grading pass complete"
        );

        GradeOutcome::new(relevant, log)
    }

    async fn grade_chunk(&self, query: &str, chunk: &EvidenceChunk) -> GradeVerdict {
        let preview = chunk.preview(self.config.preview_chars);

        match self.request_verdict(query, chunk).await {
            Ok(parsed) => GradeVerdict::new(parsed.is_relevant, parsed.reason, preview),
            Err(e) => {
                warn!(source = %chunk.source_id, error = %e, "Grading failed, defaulting to relevant");
                GradeVerdict::new(
                    true,
                    format!("(grading failed: {}) defaulted to relevant", e),
                    preview,
                )
            }
        }
    }

    async fn request_verdict(
        &self,
        query: &str,
        chunk: &EvidenceChunk,
    ) -> Result<GradeResponse, DomainError> {
        let request = LlmRequest::builder()
            .system(GRADER_SYSTEM_PROMPT)
            .user(format!(
                "USER QUERY: {}\n\nDOCUMENT CHUNK:\n{}",
                query, chunk.content
            ))
            .temperature(self.config.temperature)
            .max_tokens(self.config.grading_max_tokens)
            .json_object()
            .build();

        let response = tokio::time::timeout(
            self.config.grading_timeout(),
            self.provider.chat(&self.config.grading_model, request),
        )
        .await
        .map_err(|_| {
            DomainError::provider(
                self.provider.provider_name(),
                format!("grading timed out after {:?}", self.config.grading_timeout()),
            )
        })??;

        parse_verdict(response.content())
    }
}

fn parse_verdict(raw: &str) -> Result<GradeResponse, DomainError> {
    let json_str = extract_json(raw).unwrap_or(raw);

    serde_json::from_str(json_str).map_err(|e| {
        DomainError::validation(format!("Invalid grader response format: {}", e))
    })
}

/// Extract a JSON object from a string (handles markdown code fences)
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
