//! CRAG pipeline implementation
//!
//! Grading, rewriting, generation and the orchestrating state machine.

mod generator;
mod grader;
mod orchestrator;
mod rewriter;

pub use generator::ContextAnswerGenerator;
pub use grader::LlmRelevanceGrader;
pub use orchestrator::CragOrchestrator;
pub use rewriter::LlmQueryRewriter;
