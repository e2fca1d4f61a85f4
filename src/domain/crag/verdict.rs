//! Relevance grading verdict types

use serde::{Deserialize, Serialize};

use crate::domain::evidence::EvidenceChunk;

/// Per-chunk relevance judgement, recorded once per grading pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeVerdict {
    pub is_relevant: bool,
    /// One-sentence justification from the judge, or a failure note when
    /// the verdict was defaulted
    pub reason: String,
    /// Truncated chunk content for trace display; never used in grading
    pub chunk_preview: String,
}

impl GradeVerdict {
    pub fn new(
        is_relevant: bool,
        reason: impl Into<String>,
        chunk_preview: impl Into<String>,
    ) -> Self {
        Self {
            is_relevant,
            reason: reason.into(),
            chunk_preview: chunk_preview.into(),
        }
    }
}

/// Result of grading one retrieved set
///
/// `log` preserves the order of the graded input; `relevant` is the
/// subset of input chunks whose verdict was positive, in input order.
#[derive(Debug, Clone, Default)]
pub struct GradeOutcome {
    pub relevant: Vec<EvidenceChunk>,
    pub log: Vec<GradeVerdict>,
}

impl GradeOutcome {
    pub fn new(relevant: Vec<EvidenceChunk>, log: Vec<GradeVerdict>) -> Self {
        Self { relevant, log }
    }

    pub fn has_relevant(&self) -> bool {
        !self.relevant.is_empty()
    }
}
