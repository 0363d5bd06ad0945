//! Relevance-ranked search over job postings
//!
//! The engine answers one question: given free text, an optional location,
//! and an optional contact-email constraint, which postings are relevant and
//! in what order? It is deliberately index-free; filtering and scoring are
//! expressed as portable expression trees executed by the document store in
//! a single pass.
//!
//! # Architecture
//!
//! ```text
//! query params
//!     │
//!     ▼
//! ┌──────────────────┐   ┌──────────────────────┐
//! │  Token Expander   │   │ Title Relevance Index │
//! │  (expand.rs +     │   │ (titles.rs)           │
//! │   synonyms.rs)    │   │                       │
//! └────────┬─────────┘   └──────────┬───────────┘
//!          │ tokens                  │ related titles
//!          ▼                         ▼
//! ┌─────────────────────────────────────────────┐
//! │        Query Planner / Scorer (plan.rs)      │
//! │  FilterExpr (admission) + ScoreExpr (rank)   │
//! └────────────────────┬────────────────────────┘
//!                      │ one store pass
//!                      ▼
//! ┌─────────────────────────────────────────────┐
//! │   PostingStore: filter, score, order, page   │
//! └────────────────────┬────────────────────────┘
//!                      │ total + rows
//!                      ▼
//!          SearchResponse (service.rs)
//! ```
//!
//! Admission and ranking are independent: the title gate decides whether a
//! posting appears at all, the score only decides where. Ordering is score
//! descending, then creation time descending, then posting id.

pub mod error;
pub mod expand;
pub mod plan;
pub mod query;
pub mod service;
pub mod synonyms;
pub mod titles;

pub use error::{SearchError, SearchResult};
pub use plan::{FilterExpr, ScoreExpr, ScoreTerm};
pub use query::{EmailFilter, SearchQuery, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
pub use service::{SearchHit, SearchResponse, SearchService};
