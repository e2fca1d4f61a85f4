//! CRAG (Corrective RAG) domain
//!
//! Configuration, verdict and outcome types for the corrective retrieval
//! loop: retrieve, grade, then either generate or rewrite and retry.

mod config;
mod outcome;
mod verdict;

pub use config::{CragConfig, FusionConfig};
pub use outcome::{CancelToken, CragOutcome};
pub use verdict::{GradeOutcome, GradeVerdict};
