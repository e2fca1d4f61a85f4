//! Evidence chunk and ranked retrieval result types

use serde::{Deserialize, Serialize};

/// Immutable unit of retrievable text, produced during ingestion.
///
/// Identity is the full triple (content, source_id, start_offset): two
/// chunks with the same text from different positions are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceChunk {
    /// Chunk text
    pub content: String,
    /// Opaque identifier of the origin document
    pub source_id: String,
    /// Position within the source, for traceability
    pub start_offset: usize,
}

impl EvidenceChunk {
    /// Create a new evidence chunk
    pub fn new(content: impl Into<String>, source_id: impl Into<String>, start_offset: usize) -> Self {
        Self {
            content: content.into(),
            source_id: source_id.into(),
            start_offset,
        }
    }

    /// First `max_chars` characters of the content with embedded newlines
    /// collapsed to spaces. Used for observability traces only.
    pub fn preview(&self, max_chars: usize) -> String {
        self.content
            .chars()
            .take(max_chars)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect()
    }
}

/// One entry of a single-strategy ranked result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub chunk: EvidenceChunk,
    /// Strategy-specific score; not comparable across strategies
    pub score: f32,
}

impl RankedEntry {
    pub fn new(chunk: EvidenceChunk, score: f32) -> Self {
        Self { chunk, score }
    }
}

/// Ordered result list from one retrieval strategy.
///
/// Order is significant: position defines the 1-based rank used by fusion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedList {
    entries: Vec<RankedEntry>,
}

impl RankedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<RankedEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, chunk: EvidenceChunk, score: f32) {
        self.entries.push(RankedEntry::new(chunk, score));
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Iterate entries with their 1-based rank
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &RankedEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fused, deduplicated retrieval result, truncated to the configured top-k
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FusedResult {
    chunks: Vec<EvidenceChunk>,
}

impl FusedResult {
    pub fn new(chunks: Vec<EvidenceChunk>) -> Self {
        Self { chunks }
    }

    pub fn chunks(&self) -> &[EvidenceChunk] {
        &self.chunks
    }

    pub fn into_chunks(self) -> Vec<EvidenceChunk> {
        self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
