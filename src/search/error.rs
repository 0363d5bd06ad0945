//! Error types for search operations

use crate::error::AppError;

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request carried no usable selector
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A store round-trip exceeded the per-request budget
    #[error("Search timed out after {0} ms")]
    Timeout(u64),

    /// The store failed; propagated unchanged, never retried here
    #[error("Store error: {0}")]
    Store(String),
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidQuery(msg) => AppError::Validation(msg),
            SearchError::Timeout(_) => AppError::Timeout(err.to_string()),
            SearchError::Store(msg) => AppError::Database(msg),
        }
    }
}
