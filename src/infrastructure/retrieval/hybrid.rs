//! Hybrid retriever
//!
//! Runs the semantic and lexical searches concurrently against the same
//! index and fuses the two ranked lists into one evidence set.

use std::sync::Arc;

use tracing::debug;

use crate::domain::crag::FusionConfig;
use crate::domain::evidence::FusedResult;
use crate::domain::index::SearchIndex;
use crate::domain::DomainError;

use super::fusion;

/// Retriever combining semantic and lexical ranked search via weighted
/// reciprocal-rank fusion
#[derive(Debug)]
pub struct HybridRetriever<I>
where
    I: SearchIndex,
{
    index: Arc<I>,
    config: FusionConfig,
}

impl<I: SearchIndex> HybridRetriever<I> {
    pub fn new(index: Arc<I>, config: FusionConfig) -> Self {
        Self { index, config }
    }

    pub fn with_defaults(index: Arc<I>) -> Self {
        Self::new(index, FusionConfig::default())
    }

    /// Retrieve the fused evidence set for a query.
    ///
    /// Read-only against the index. An index failure on either strategy is
    /// fatal: without evidence the orchestrator cannot continue the run.
    pub async fn retrieve(&self, query: &str) -> Result<FusedResult, DomainError> {
        let (semantic, lexical) = tokio::try_join!(
            self.index.semantic_search(query, self.config.k),
            self.index.lexical_search(query, self.config.k),
        )
        .map_err(|e| DomainError::retrieval_unavailable(e.to_string()))?;

        debug!(
            corpus = self.index.corpus_id(),
            semantic = semantic.len(),
            lexical = lexical.len(),
            "Fusing ranked lists"
        );

        let chunks = fusion::fuse(&semantic, &lexical, &self.config);
        Ok(FusedResult::new(chunks))
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::index::mock::MockSearchIndex;

    #[tokio::test]
    async fn test_retrieve_fuses_both_lists() {
        let index = Arc::new(
            MockSearchIndex::new("corpus")
                .with_semantic_results(MockSearchIndex::ranked(&[("alpha", 0.9), ("beta", 0.8)]))
                .with_lexical_results(MockSearchIndex::ranked(&[("beta", 12.0), ("gamma", 7.0)])),
        );
        let retriever = HybridRetriever::with_defaults(index.clone());

        let result = retriever.retrieve("query").await.unwrap();

        let contents: Vec<&str> = result
            .chunks()
            .iter()
            .map(|c| c.content.as_str())
            .collect();
        assert_eq!(contents, vec!["beta", "alpha", "gamma"]);
        // One semantic plus one lexical search
        assert_eq!(index.search_count(), 2);
    }

    #[tokio::test]
    async fn test_retrieve_caps_at_top_k() {
        let index = Arc::new(
            MockSearchIndex::new("corpus")
                .with_semantic_results(MockSearchIndex::ranked(&[
                    ("a", 0.9),
                    ("b", 0.8),
                    ("c", 0.7),
                ]))
                .with_lexical_results(MockSearchIndex::ranked(&[("d", 3.0), ("e", 2.0)])),
        );
        let config = FusionConfig::default().with_top_k(2);
        let retriever = HybridRetriever::new(index, config);

        let result = retriever.retrieve("query").await.unwrap();
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_index_failure_is_retrieval_unavailable() {
        let index = Arc::new(MockSearchIndex::new("corpus").with_failure());
        let retriever = HybridRetriever::with_defaults(index);

        let error = retriever.retrieve("query").await.unwrap_err();
        assert!(matches!(error, DomainError::RetrievalUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_empty_index_yields_empty_result() {
        let index = Arc::new(MockSearchIndex::new("corpus"));
        let retriever = HybridRetriever::with_defaults(index);

        let result = retriever.retrieve("query").await.unwrap();
        assert!(result.is_empty());
    }
}
