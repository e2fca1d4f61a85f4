//! Search index trait
//!
//! The index itself (embedding construction, term statistics, chunking) is
//! built by an external ingestion pipeline. The engine only needs the two
//! ranked searches below, issued read-only against a shared index.

use std::fmt::Debug;

use async_trait::async_trait;

use super::error::DomainError;
use super::evidence::RankedList;

/// Provider trait for ranked corpus searches
///
/// Implementations must support concurrent read access; the engine never
/// mutates the index.
#[async_trait]
pub trait SearchIndex: Send + Sync + Debug {
    /// Opaque identifier of the corpus this index was built from
    fn corpus_id(&self) -> &str;

    /// Embedding-similarity search, capped at `k` results
    async fn semantic_search(&self, query: &str, k: usize) -> Result<RankedList, DomainError>;

    /// Term-overlap search, capped at `k` results
    async fn lexical_search(&self, query: &str, k: usize) -> Result<RankedList, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::evidence::EvidenceChunk;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock search index returning fixed ranked lists
    #[derive(Debug)]
    pub struct MockSearchIndex {
        corpus_id: String,
        semantic: RankedList,
        lexical: RankedList,
        search_count: AtomicUsize,
        should_fail: bool,
    }

    impl MockSearchIndex {
        pub fn new(corpus_id: impl Into<String>) -> Self {
            Self {
                corpus_id: corpus_id.into(),
                semantic: RankedList::new(),
                lexical: RankedList::new(),
                search_count: AtomicUsize::new(0),
                should_fail: false,
            }
        }

        /// Semantic results returned on every call
        pub fn with_semantic_results(mut self, list: RankedList) -> Self {
            self.semantic = list;
            self
        }

        /// Lexical results returned on every call
        pub fn with_lexical_results(mut self, list: RankedList) -> Self {
            self.lexical = list;
            self
        }

        /// Make every search fail
        pub fn with_failure(mut self) -> Self {
            self.should_fail = true;
            self
        }

        /// Number of search calls issued (semantic + lexical)
        pub fn search_count(&self) -> usize {
            self.search_count.load(Ordering::SeqCst)
        }

        /// Convenience: build a ranked list from (content, score) pairs.
        /// Chunk identity is keyed off content alone so the same content in
        /// both lists fuses into one candidate.
        pub fn ranked(entries: &[(&str, f32)]) -> RankedList {
            let mut list = RankedList::new();
            for (content, score) in entries {
                list.push(EvidenceChunk::new(*content, "mock-source", 0), *score);
            }
            list
        }
    }

    #[async_trait]
    impl SearchIndex for MockSearchIndex {
        fn corpus_id(&self) -> &str {
            &self.corpus_id
        }

        async fn semantic_search(
            &self,
            _query: &str,
            k: usize,
        ) -> Result<RankedList, DomainError> {
            self.search_count.fetch_add(1, Ordering::SeqCst);
            if self.should_fail {
                return Err(DomainError::retrieval_unavailable("mock index offline"));
            }

            Ok(truncate(self.semantic.clone(), k))
        }

        async fn lexical_search(&self, _query: &str, k: usize) -> Result<RankedList, DomainError> {
            self.search_count.fetch_add(1, Ordering::SeqCst);
            if self.should_fail {
                return Err(DomainError::retrieval_unavailable("mock index offline"));
            }

            Ok(truncate(self.lexical.clone(), k))
        }
    }

    fn truncate(list: RankedList, k: usize) -> RankedList {
        RankedList::from_entries(list.entries().iter().take(k).cloned().collect())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_index_fixed_results() {
            let index = MockSearchIndex::new("test-corpus")
                .with_semantic_results(MockSearchIndex::ranked(&[("a", 0.9), ("b", 0.8)]));

            let results = index.semantic_search("query", 5).await.unwrap();
            assert_eq!(results.len(), 2);
            assert_eq!(index.search_count(), 1);
        }

        #[tokio::test]
        async fn test_mock_index_caps_at_k() {
            let index = MockSearchIndex::new("test-corpus")
                .with_semantic_results(MockSearchIndex::ranked(&[("a", 0.9), ("b", 0.8), ("c", 0.7)]));

            let results = index.semantic_search("query", 2).await.unwrap();
            assert_eq!(results.len(), 2);
        }

        #[tokio::test]
        async fn test_mock_index_failure() {
            let index = MockSearchIndex::new("test-corpus").with_failure();
            let result = index.lexical_search("query", 5).await;
            assert!(result.is_err());
        }
    }
}
