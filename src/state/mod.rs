//! Posting storage
//!
//! The document-store collaborator boundary. The search engine consumes a
//! query capability: a boolean filter expression over posting fields, a
//! per-row score expression, deterministic ordering with limit/offset, and an
//! independent count-only evaluation of the same filter.

pub mod memory;

pub use memory::InMemoryStore;

use crate::error::Result;
use crate::models::JobPosting;
use crate::search::plan::{FilterExpr, ScoreExpr};
use async_trait::async_trait;

/// A posting together with its computed relevance score.
#[derive(Debug, Clone)]
pub struct ScoredPosting {
    pub posting: JobPosting,
    pub score: u32,
}

/// One page of query results plus the exact full-match count.
#[derive(Debug, Clone)]
pub struct QueryPage {
    /// Count of all matches ignoring pagination. Never derived from the page
    /// length.
    pub total: u64,

    /// At most `limit` scored postings in ranked order.
    pub rows: Vec<ScoredPosting>,
}

/// Trait for posting storage operations
#[async_trait]
pub trait PostingStore: Send + Sync {
    /// Insert-if-absent keyed on `posting_id`; an existing posting gets its
    /// payload and contact data refreshed in place (ingestion re-run
    /// semantics). Returns true when a new posting was created.
    async fn upsert_posting(&self, posting: &JobPosting) -> Result<bool>;

    /// Get a posting by its external identifier
    async fn get_posting(&self, posting_id: &str) -> Result<Option<JobPosting>>;

    /// Count postings matching the filter, with no score evaluation
    async fn count_postings(&self, filter: &FilterExpr) -> Result<u64>;

    /// Execute filter + score + order + window in a single pass.
    ///
    /// Ordering: score descending, then `created_at` descending, then
    /// `posting_id` ascending as the stable final key, so consecutive page
    /// fetches over an unchanged data set never duplicate or drop rows.
    /// The returned total and page come from the same pass; backends without
    /// snapshot isolation must not run them as two separate scans.
    async fn search_postings(
        &self,
        filter: &FilterExpr,
        score: &ScoreExpr,
        limit: usize,
        offset: usize,
    ) -> Result<QueryPage>;
}
