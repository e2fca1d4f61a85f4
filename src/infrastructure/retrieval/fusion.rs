//! Weighted reciprocal-rank fusion
//!
//! Combines a semantic and a lexical ranked list into one ordering without
//! normalizing scores across strategies. Each list contributes
//! `weight / (rank + k_rrf)` for the chunks it holds; chunks appearing in
//! both lists accumulate both contributions, which is what lets an item
//! ranked second everywhere beat an item leading a single list.

use std::collections::HashMap;

use crate::domain::crag::FusionConfig;
use crate::domain::evidence::{EvidenceChunk, RankedList};

#[derive(Debug)]
struct FusedCandidate {
    chunk: EvidenceChunk,
    score: f64,
    semantic_rank: Option<usize>,
    lexical_rank: Option<usize>,
}

/// Fuse two ranked lists into a deduplicated, descending-score ordering,
/// truncated to `config.top_k`.
///
/// Ties break by semantic rank ascending (chunks absent from the semantic
/// list sort last), then lexical rank, so repeated calls on identical
/// inputs return identical orderings.
pub fn fuse(
    semantic: &RankedList,
    lexical: &RankedList,
    config: &FusionConfig,
) -> Vec<EvidenceChunk> {
    let mut candidates: HashMap<EvidenceChunk, FusedCandidate> = HashMap::new();

    for (rank, entry) in semantic.ranked() {
        let candidate = candidates
            .entry(entry.chunk.clone())
            .or_insert_with(|| FusedCandidate {
                chunk: entry.chunk.clone(),
                score: 0.0,
                semantic_rank: None,
                lexical_rank: None,
            });
        candidate.score += config.semantic_weight / (rank as f64 + config.rrf_k);
        // A duplicate within one list keeps its best (first) rank
        if candidate.semantic_rank.is_none() {
            candidate.semantic_rank = Some(rank);
        }
    }

    for (rank, entry) in lexical.ranked() {
        let candidate = candidates
            .entry(entry.chunk.clone())
            .or_insert_with(|| FusedCandidate {
                chunk: entry.chunk.clone(),
                score: 0.0,
                semantic_rank: None,
                lexical_rank: None,
            });
        candidate.score += config.lexical_weight / (rank as f64 + config.rrf_k);
        if candidate.lexical_rank.is_none() {
            candidate.lexical_rank = Some(rank);
        }
    }

    let mut fused: Vec<FusedCandidate> = candidates.into_values().collect();
    fused.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                rank_key(a.semantic_rank)
                    .cmp(&rank_key(b.semantic_rank))
                    .then_with(|| rank_key(a.lexical_rank).cmp(&rank_key(b.lexical_rank)))
            })
    });

    fused
        .into_iter()
        .take(config.top_k)
        .map(|c| c.chunk)
        .collect()
}

fn rank_key(rank: Option<usize>) -> usize {
    rank.unwrap_or(usize::MAX)
}
