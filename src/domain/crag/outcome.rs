//! Orchestration run output and cancellation handle

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::verdict::GradeVerdict;
use crate::domain::evidence::EvidenceChunk;

/// Final output of one orchestration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CragOutcome {
    /// Generated answer text
    pub answer: String,
    /// Chunks the answer was generated from: the relevant subset, or the
    /// full retrieved set when nothing passed grading
    pub evidence: Vec<EvidenceChunk>,
    /// Every verdict produced across all retrieval passes, in grading order
    pub grade_log: Vec<GradeVerdict>,
    /// Query used on the final retrieval pass
    pub final_query: String,
    /// Number of rewrites performed (0 to max_retries)
    pub rewrites: u32,
}

/// Cooperative cancellation handle for an in-flight run
///
/// Cloned handles share state. The orchestrator checks the token at each
/// state transition boundary; once cancelled, no further model calls are
/// issued and the run reports a cancelled outcome.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
