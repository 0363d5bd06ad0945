//! Main search service implementation
//!
//! Orchestrates one search request end to end: selector short-circuit, token
//! expansion, title relevance lookup, query planning, a single timed store
//! pass, and result assembly. The service holds no per-request state; every
//! call is a fresh computation over the immutable synonym and title tables.

use crate::config::SearchConfig;
use crate::models::JobPosting;
use crate::search::error::{SearchError, SearchResult};
use crate::search::query::SearchQuery;
use crate::search::{expand, plan, titles};
use crate::state::{PostingStore, ScoredPosting};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// A single search result hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Internal identifier
    pub id: Uuid,

    /// External posting identifier
    pub posting_id: String,

    /// Computed relevance score (0 when no scoring clause matched)
    pub score: u32,

    /// Whether a contact email was discovered
    pub has_contact_email: bool,

    /// Discovered contact email, if any
    pub contact_email: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Flattened stored payload fields. Kept under a dedicated key so
    /// payload data can never shadow identifiers or the score.
    pub fields: HashMap<String, serde_json::Value>,
}

impl SearchHit {
    fn from_row(row: ScoredPosting) -> Self {
        let ScoredPosting { posting, score } = row;
        let JobPosting {
            id,
            posting_id,
            fields,
            has_contact_email,
            contact_email,
            created_at,
        } = posting;

        Self {
            id,
            posting_id,
            score,
            has_contact_email,
            contact_email,
            created_at,
            fields,
        }
    }
}

/// Search response with results and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked page of results
    pub hits: Vec<SearchHit>,

    /// Exact count of all matches ignoring pagination
    pub total_count: u64,

    /// Offset used for pagination
    pub offset: usize,

    /// Limit used for pagination (after clamping)
    pub limit: usize,

    /// Search execution time in milliseconds
    pub search_time_ms: u64,
}

impl SearchResponse {
    fn empty(limit: usize, offset: usize) -> Self {
        Self {
            hits: Vec::new(),
            total_count: 0,
            offset,
            limit,
            search_time_ms: 0,
        }
    }
}

/// Main search service
pub struct SearchService {
    store: Arc<dyn PostingStore>,
    config: SearchConfig,
}

impl SearchService {
    /// Create a new search service over a posting store
    pub fn new(store: Arc<dyn PostingStore>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    /// Search for postings
    ///
    /// Returns an empty response without any store access when no selector
    /// is effectively set. Store failures and timeouts propagate unchanged;
    /// nothing is retried here.
    pub async fn search(&self, query: &SearchQuery) -> SearchResult<SearchResponse> {
        let start_time = std::time::Instant::now();
        let limit = query.clamped_limit();
        let offset = query.offset;

        if !query.has_selector() {
            return Ok(SearchResponse::empty(limit, offset));
        }

        let tokens = expand::expand(&query.text);
        let related_titles = titles::related_titles(&query.text);
        let (filter, score) = plan::plan(query, &tokens, &related_titles);

        tracing::debug!(
            text = %query.text,
            location = %query.location,
            tokens = tokens.len(),
            related_titles = related_titles.len(),
            "Search planned"
        );

        let budget = Duration::from_millis(self.config.request_timeout_ms);
        let page = tokio::time::timeout(
            budget,
            self.store.search_postings(&filter, &score, limit, offset),
        )
        .await
        .map_err(|_| SearchError::Timeout(self.config.request_timeout_ms))?
        .map_err(|e| SearchError::Store(e.to_string()))?;

        let search_time_ms = start_time.elapsed().as_millis() as u64;
        tracing::debug!(
            total_count = page.total,
            page_len = page.rows.len(),
            search_time_ms,
            "Search executed"
        );

        Ok(SearchResponse {
            total_count: page.total,
            hits: page.rows.into_iter().map(SearchHit::from_row).collect(),
            offset,
            limit,
            search_time_ms,
        })
    }
}
