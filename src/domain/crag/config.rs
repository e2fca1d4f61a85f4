//! CRAG configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for hybrid retrieval fusion
///
/// Fused score per chunk:
/// `w_semantic / (rank_semantic + k_rrf) + w_lexical / (rank_lexical + k_rrf)`
/// with 1-based ranks and zero contribution for lists the chunk is absent
/// from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionConfig {
    /// Weight of the semantic (embedding-similarity) list
    #[serde(default = "default_semantic_weight")]
    pub semantic_weight: f64,
    /// Weight of the lexical (term-overlap) list
    #[serde(default = "default_lexical_weight")]
    pub lexical_weight: f64,
    /// Reciprocal-rank smoothing constant
    #[serde(default = "default_rrf_k")]
    pub rrf_k: f64,
    /// Per-strategy result cap
    #[serde(default = "default_k")]
    pub k: usize,
    /// Fused result cap
    #[serde(default = "default_k")]
    pub top_k: usize,
}

fn default_semantic_weight() -> f64 {
    0.7
}

fn default_lexical_weight() -> f64 {
    0.3
}

fn default_rrf_k() -> f64 {
    60.0
}

fn default_k() -> usize {
    5
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            semantic_weight: default_semantic_weight(),
            lexical_weight: default_lexical_weight(),
            rrf_k: default_rrf_k(),
            k: default_k(),
            top_k: default_k(),
        }
    }
}

impl FusionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both list weights
    pub fn with_weights(mut self, semantic: f64, lexical: f64) -> Self {
        self.semantic_weight = semantic.max(0.0);
        self.lexical_weight = lexical.max(0.0);
        self
    }

    pub fn with_rrf_k(mut self, rrf_k: f64) -> Self {
        self.rrf_k = rrf_k.max(0.0);
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

/// Configuration for the CRAG orchestration loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CragConfig {
    /// Retrieval fusion parameters
    #[serde(default)]
    pub fusion: FusionConfig,
    /// Maximum number of query rewrites before committing to a
    /// best-effort answer
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Model used for relevance grading
    #[serde(default = "default_grading_model")]
    pub grading_model: String,
    /// Model used for query rewriting
    #[serde(default = "default_grading_model")]
    pub rewrite_model: String,
    /// Model used for answer generation
    #[serde(default = "default_generation_model")]
    pub generation_model: String,
    /// Per-call timeout for grading judge requests, in seconds
    #[serde(default = "default_grading_timeout_secs")]
    pub grading_timeout_secs: u64,
    /// Temperature for judge calls (0 = deterministic)
    #[serde(default)]
    pub temperature: f32,
    /// Token cap for grading verdicts
    #[serde(default = "default_grading_max_tokens")]
    pub grading_max_tokens: u32,
    /// Characters kept in verdict chunk previews
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_max_retries() -> u32 {
    2
}

fn default_grading_model() -> String {
    "llama3.2".to_string()
}

fn default_generation_model() -> String {
    "phi3".to_string()
}

fn default_grading_timeout_secs() -> u64 {
    30
}

fn default_grading_max_tokens() -> u32 {
    150
}

fn default_preview_chars() -> usize {
    300
}

impl Default for CragConfig {
    fn default() -> Self {
        Self {
            fusion: FusionConfig::default(),
            max_retries: default_max_retries(),
            grading_model: default_grading_model(),
            rewrite_model: default_grading_model(),
            generation_model: default_generation_model(),
            grading_timeout_secs: default_grading_timeout_secs(),
            temperature: 0.0,
            grading_max_tokens: default_grading_max_tokens(),
            preview_chars: default_preview_chars(),
        }
    }
}

impl CragConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fusion(mut self, fusion: FusionConfig) -> Self {
        self.fusion = fusion;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_grading_model(mut self, model: impl Into<String>) -> Self {
        self.grading_model = model.into();
        self
    }

    pub fn with_rewrite_model(mut self, model: impl Into<String>) -> Self {
        self.rewrite_model = model.into();
        self
    }

    pub fn with_generation_model(mut self, model: impl Into<String>) -> Self {
        self.generation_model = model.into();
        self
    }

    pub fn with_grading_timeout_secs(mut self, secs: u64) -> Self {
        self.grading_timeout_secs = secs;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    pub fn grading_timeout(&self) -> Duration {
        Duration::from_secs(self.grading_timeout_secs)
    }
}
