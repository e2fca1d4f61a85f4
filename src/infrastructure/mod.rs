//! Infrastructure layer - Implementations with I/O

pub mod crag;
pub mod llm;
pub mod logging;
pub mod retrieval;

pub use crag::{ContextAnswerGenerator, CragOrchestrator, LlmQueryRewriter, LlmRelevanceGrader};
pub use llm::{HttpClient, HttpClientTrait, OllamaProvider};
pub use logging::init_logging;
pub use retrieval::HybridRetriever;
