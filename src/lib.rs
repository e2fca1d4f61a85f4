//! DocuSense Engine
//!
//! Corrective RAG (CRAG) orchestration over an ingested document corpus:
//! - Hybrid retrieval fusing semantic and lexical ranked searches
//! - LLM-as-judge relevance grading with fail-safe verdict parsing
//! - Bounded query rewriting when no evidence passes grading
//! - Context-grounded answer generation with best-effort fallback
//!
//! Ingestion, index construction and presentation layers are external
//! collaborators: callers supply a [`domain::SearchIndex`] and consume the
//! [`domain::CragOutcome`] this engine produces.

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::EngineConfig;
pub use domain::{
    CancelToken, CragConfig, CragOutcome, DomainError, EvidenceChunk, FusionConfig, GradeVerdict,
    SearchIndex,
};
pub use infrastructure::{CragOrchestrator, HttpClient, HybridRetriever, OllamaProvider};

use std::sync::Arc;

/// Orchestrator wired to a local Ollama daemon
pub type OllamaOrchestrator<I> = CragOrchestrator<I, OllamaProvider<HttpClient>>;

/// Create an orchestrator for the given index, with judge and generation
/// calls served by the configured Ollama endpoint.
pub fn create_orchestrator<I>(
    config: &EngineConfig,
    index: Arc<I>,
) -> anyhow::Result<OllamaOrchestrator<I>>
where
    I: SearchIndex,
{
    let http_client = HttpClient::with_timeout(config.ollama.timeout())
        .map_err(|e| anyhow::anyhow!("Failed to initialize HTTP client: {}", e))?;
    let provider = Arc::new(OllamaProvider::with_base_url(
        http_client,
        &config.ollama.base_url,
    ));

    Ok(CragOrchestrator::new(
        index,
        provider,
        config.crag.clone(),
    ))
}
