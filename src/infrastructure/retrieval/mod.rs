//! Hybrid retrieval implementations

mod fusion;
mod hybrid;

pub use fusion::fuse;
pub use hybrid::HybridRetriever;
