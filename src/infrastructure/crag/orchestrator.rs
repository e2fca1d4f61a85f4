//! CRAG orchestrator
//!
//! Explicit state machine sequencing retrieve, grade, route, rewrite and
//! generate. The retry bound guarantees termination within at most
//! `max_retries + 1` retrieval passes; when the bound is hit with nothing
//! relevant, generation falls back to the full retrieved set rather than
//! failing the run.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::crag::{CancelToken, CragConfig, CragOutcome, GradeVerdict};
use crate::domain::evidence::EvidenceChunk;
use crate::domain::index::SearchIndex;
use crate::domain::llm::LlmProvider;
use crate::domain::DomainError;

use super::{ContextAnswerGenerator, LlmQueryRewriter, LlmRelevanceGrader};
use crate::infrastructure::retrieval::HybridRetriever;

/// States of the orchestration loop. `Route` is a pure decision with no
/// I/O; `Generate` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Retrieve,
    Grade,
    Route,
    Rewrite,
    Generate,
}

/// Mutable record threaded through one run. Created per query, discarded
/// at the end; never shared between runs.
#[derive(Debug)]
struct RunState {
    current_query: String,
    original_query: String,
    retrieved: Vec<EvidenceChunk>,
    relevant: Vec<EvidenceChunk>,
    retry_count: u32,
    grade_log: Vec<GradeVerdict>,
}

impl RunState {
    fn new(query: &str) -> Self {
        Self {
            current_query: query.to_string(),
            original_query: query.to_string(),
            retrieved: Vec::new(),
            relevant: Vec::new(),
            retry_count: 0,
            grade_log: Vec::new(),
        }
    }
}

/// Stateless, reusable CRAG engine
///
/// Holds the capabilities and configuration; all per-query state lives in
/// the run, so concurrent callers can share one orchestrator.
#[derive(Debug)]
pub struct CragOrchestrator<I, P>
where
    I: SearchIndex,
    P: LlmProvider,
{
    retriever: HybridRetriever<I>,
    grader: LlmRelevanceGrader<P>,
    rewriter: LlmQueryRewriter<P>,
    generator: ContextAnswerGenerator<P>,
    config: CragConfig,
}

impl<I, P> CragOrchestrator<I, P>
where
    I: SearchIndex,
    P: LlmProvider,
{
    pub fn new(index: Arc<I>, provider: Arc<P>, config: CragConfig) -> Self {
        Self {
            retriever: HybridRetriever::new(index, config.fusion.clone()),
            grader: LlmRelevanceGrader::new(provider.clone(), config.clone()),
            rewriter: LlmQueryRewriter::new(provider.clone(), config.clone()),
            generator: ContextAnswerGenerator::new(provider, config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &CragConfig {
        &self.config
    }

    /// Run one query end to end
    pub async fn run(&self, query: &str) -> Result<CragOutcome, DomainError> {
        self.run_cancellable(query, &CancelToken::new()).await
    }

    /// Run one query with cooperative cancellation. The token is checked
    /// at every state transition boundary; once cancelled, no further
    /// model calls are issued and partial grade logs are discarded.
    pub async fn run_cancellable(
        &self,
        query: &str,
        cancel: &CancelToken,
    ) -> Result<CragOutcome, DomainError> {
        info!(query, "Starting CRAG run");

        let mut run = RunState::new(query);
        let mut step = Step::Retrieve;

        loop {
            if cancel.is_cancelled() {
                info!(query, "Run cancelled");
                return Err(DomainError::Cancelled);
            }

            step = match step {
                Step::Retrieve => {
                    let fused = self.retriever.retrieve(&run.current_query).await?;
                    debug!(
                        pass = run.retry_count + 1,
                        retrieved = fused.len(),
                        "Retrieval pass complete"
                    );
                    run.retrieved = fused.into_chunks();
                    Step::Grade
                }
                Step::Grade => {
                    let outcome = self.grader.grade(&run.current_query, &run.retrieved).await;
                    run.relevant = outcome.relevant;
                    run.grade_log.extend(outcome.log);
                    Step::Route
                }
                Step::Route => {
                    if !run.relevant.is_empty() || run.retry_count >= self.config.max_retries {
                        Step::Generate
                    } else {
                        Step::Rewrite
                    }
                }
                Step::Rewrite => {
                    run.current_query = self.rewriter.rewrite(&run.current_query).await?;
                    run.retry_count += 1;
                    Step::Retrieve
                }
                Step::Generate => {
                    // Best-effort fallback: when nothing passed grading at
                    // the retry bound, answer from everything retrieved.
                    let evidence = if run.relevant.is_empty() {
                        std::mem::take(&mut run.retrieved)
                    } else {
                        std::mem::take(&mut run.relevant)
                    };

                    let answer = self
                        .generator
                        .generate(&run.original_query, &evidence)
                        .await?;

                    info!(
                        rewrites = run.retry_count,
                        evidence = evidence.len(),
                        "CRAG run complete"
                    );

                    return Ok(CragOutcome {
                        answer,
                        evidence,
                        grade_log: run.grade_log,
                        final_query: run.current_query,
                        rewrites: run.retry_count,
                    });
                }
            };
        }
    }
}
