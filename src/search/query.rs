//! Search query building

use serde::{Deserialize, Serialize};

/// Smallest page a request can ask for.
pub const MIN_LIMIT: usize = 1;

/// Largest page a request can ask for; anything above is silently clamped.
pub const MAX_LIMIT: usize = 100;

/// Default page size when the caller does not specify one.
pub const DEFAULT_LIMIT: usize = 20;

/// Tri-state contact-email selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailFilter {
    /// No constraint on contact email.
    #[default]
    Any,

    /// Require the contact-email flag set and a non-empty address.
    Present,

    /// Require the flag unset/false or a null-or-empty address.
    Absent,
}

/// One search request (transient, one per call).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query; may be empty.
    pub text: String,

    /// Raw location filter; may be empty.
    pub location: String,

    /// Contact-email constraint.
    pub email_filter: EmailFilter,

    /// Requested page size (clamped to [MIN_LIMIT, MAX_LIMIT] on use).
    pub limit: usize,

    /// Page offset (non-negative by construction).
    pub offset: usize,
}

impl SearchQuery {
    /// Create a new search query over free text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: String::new(),
            email_filter: EmailFilter::Any,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }

    /// Set the location filter
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the contact-email constraint
    pub fn with_email_filter(mut self, email_filter: EmailFilter) -> Self {
        self.email_filter = email_filter;
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page offset
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Whether any selector is effectively set.
    ///
    /// Blank text, blank location, and an `Any` email filter together mean
    /// the engine short-circuits to an empty result without touching the
    /// store.
    pub fn has_selector(&self) -> bool {
        !self.text.trim().is_empty()
            || !self.location.trim().is_empty()
            || self.email_filter != EmailFilter::Any
    }

    /// Page size with the [MIN_LIMIT, MAX_LIMIT] clamp applied.
    pub fn clamped_limit(&self) -> usize {
        self.limit.clamp(MIN_LIMIT, MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let query = SearchQuery::new("software engineer")
            .with_location("Seattle")
            .with_email_filter(EmailFilter::Present)
            .with_limit(50)
            .with_offset(10);

        assert_eq!(query.text, "software engineer");
        assert_eq!(query.location, "Seattle");
        assert_eq!(query.email_filter, EmailFilter::Present);
        assert_eq!(query.limit, 50);
        assert_eq!(query.offset, 10);
    }

    #[test]
    fn test_selector_detection() {
        assert!(!SearchQuery::new("").has_selector());
        assert!(!SearchQuery::new("   \t").has_selector());
        assert!(SearchQuery::new("nurse").has_selector());
        assert!(SearchQuery::new("").with_location("Austin").has_selector());
        assert!(SearchQuery::new("")
            .with_email_filter(EmailFilter::Absent)
            .has_selector());
    }

    #[test]
    fn test_limit_clamping() {
        assert_eq!(SearchQuery::new("x").with_limit(0).clamped_limit(), 1);
        assert_eq!(SearchQuery::new("x").with_limit(100).clamped_limit(), 100);
        assert_eq!(SearchQuery::new("x").with_limit(5000).clamped_limit(), 100);
        assert_eq!(SearchQuery::new("x").with_limit(25).clamped_limit(), 25);
    }
}
