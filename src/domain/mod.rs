//! Domain layer - Core entities, traits and configuration

pub mod crag;
pub mod error;
pub mod evidence;
pub mod index;
pub mod llm;

pub use crag::{CancelToken, CragConfig, CragOutcome, FusionConfig, GradeOutcome, GradeVerdict};
pub use error::DomainError;
pub use evidence::{EvidenceChunk, FusedResult, RankedEntry, RankedList};
pub use index::SearchIndex;
pub use llm::{
    LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, LlmResponseFormat, Message,
    MessageRole, Usage,
};
