use crate::error::Result;
use crate::models::JobPosting;
use crate::search::plan::{FilterExpr, ScoreExpr};
use crate::state::{PostingStore, QueryPage, ScoredPosting};
use async_trait::async_trait;
use dashmap::DashMap;
use std::cmp::Ordering;
use std::sync::Arc;

/// In-memory posting store keyed by external `posting_id`
#[derive(Clone)]
pub struct InMemoryStore {
    postings: Arc<DashMap<String, JobPosting>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            postings: Arc::new(DashMap::new()),
        }
    }

    /// Number of stored postings (diagnostics)
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn rank(a: &ScoredPosting, b: &ScoredPosting) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.posting.created_at.cmp(&a.posting.created_at))
        .then_with(|| a.posting.posting_id.cmp(&b.posting.posting_id))
}

#[async_trait]
impl PostingStore for InMemoryStore {
    async fn upsert_posting(&self, posting: &JobPosting) -> Result<bool> {
        if let Some(mut existing) = self.postings.get_mut(&posting.posting_id) {
            // Re-run: refresh payload and contact data, keep identity and
            // creation time
            existing.fields = posting.fields.clone();
            existing.has_contact_email = posting.has_contact_email;
            existing.contact_email = posting.contact_email.clone();
            tracing::debug!(posting_id = %posting.posting_id, "Posting refreshed");
            return Ok(false);
        }

        self.postings
            .insert(posting.posting_id.clone(), posting.clone());
        tracing::debug!(posting_id = %posting.posting_id, "Posting created");
        Ok(true)
    }

    async fn get_posting(&self, posting_id: &str) -> Result<Option<JobPosting>> {
        Ok(self.postings.get(posting_id).map(|entry| entry.clone()))
    }

    async fn count_postings(&self, filter: &FilterExpr) -> Result<u64> {
        let count = self
            .postings
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .count();
        Ok(count as u64)
    }

    async fn search_postings(
        &self,
        filter: &FilterExpr,
        score: &ScoreExpr,
        limit: usize,
        offset: usize,
    ) -> Result<QueryPage> {
        // Single pass: filter and score together, then order and window.
        // DashMap offers no snapshot isolation, so total and page must come
        // from the same scan.
        let mut rows: Vec<ScoredPosting> = self
            .postings
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| ScoredPosting {
                score: score.evaluate(entry.value()),
                posting: entry.value().clone(),
            })
            .collect();

        let total = rows.len() as u64;

        rows.sort_by(rank);

        let rows = rows.into_iter().skip(offset).take(limit).collect();

        Ok(QueryPage { total, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::posting::{FIELD_LOCATION, FIELD_TITLE};
    use crate::models::TextField;
    use chrono::{Duration, Utc};
    use serde_json::json;
    use std::collections::HashMap;

    fn posting(id: &str, title: &str) -> JobPosting {
        let mut fields = HashMap::new();
        fields.insert(FIELD_TITLE.to_string(), json!(title));
        fields.insert(FIELD_LOCATION.to_string(), json!("Seattle, WA"));
        JobPosting::new(id.to_string(), fields)
    }

    fn title_filter(needle: &str) -> FilterExpr {
        FilterExpr::Contains(TextField::Title, needle.to_string())
    }

    #[tokio::test]
    async fn test_upsert_is_insert_if_absent() {
        let store = InMemoryStore::new();

        let original = posting("post-1", "Software Engineer");
        assert!(store.upsert_posting(&original).await.unwrap());

        let mut rerun = posting("post-1", "Senior Software Engineer");
        rerun = rerun.with_contact_email("hiring@example.com");
        assert!(!store.upsert_posting(&rerun).await.unwrap());

        let stored = store.get_posting("post-1").await.unwrap().unwrap();
        // Identity and creation time survive, payload is refreshed
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.created_at, original.created_at);
        assert_eq!(
            stored.text_field(TextField::Title),
            Some("Senior Software Engineer")
        );
        assert!(stored.has_contact_email);
    }

    #[tokio::test]
    async fn test_count_matches_full_set() {
        let store = InMemoryStore::new();
        for i in 0..7 {
            store
                .upsert_posting(&posting(&format!("post-{i}"), "Backend Developer"))
                .await
                .unwrap();
        }
        store
            .upsert_posting(&posting("other", "Registered Nurse"))
            .await
            .unwrap();

        let count = store.count_postings(&title_filter("developer")).await.unwrap();
        assert_eq!(count, 7);
    }

    #[tokio::test]
    async fn test_total_is_independent_of_window() {
        let store = InMemoryStore::new();
        for i in 0..5 {
            store
                .upsert_posting(&posting(&format!("post-{i}"), "QA Engineer"))
                .await
                .unwrap();
        }

        let filter = title_filter("engineer");
        let score = ScoreExpr::default();

        let small = store.search_postings(&filter, &score, 2, 0).await.unwrap();
        let large = store.search_postings(&filter, &score, 100, 0).await.unwrap();

        assert_eq!(small.total, 5);
        assert_eq!(large.total, 5);
        assert_eq!(small.rows.len(), 2);
        assert_eq!(large.rows.len(), 5);
    }

    #[tokio::test]
    async fn test_ordering_score_then_recency_then_id() {
        let store = InMemoryStore::new();

        let mut old_strong = posting("a-old-strong", "Software Engineer");
        old_strong.created_at = Utc::now() - Duration::days(3);
        let mut new_weak = posting("b-new-weak", "Engineer");
        new_weak.created_at = Utc::now();

        store.upsert_posting(&old_strong).await.unwrap();
        store.upsert_posting(&new_weak).await.unwrap();

        let filter = title_filter("engineer");
        let score = ScoreExpr {
            terms: vec![crate::search::plan::ScoreTerm {
                field: TextField::Title,
                needle: "software".to_string(),
                weight: 3,
            }],
        };

        let page = store.search_postings(&filter, &score, 10, 0).await.unwrap();
        // Higher score wins despite being older
        assert_eq!(page.rows[0].posting.posting_id, "a-old-strong");
        assert_eq!(page.rows[1].posting.posting_id, "b-new-weak");
    }

    #[tokio::test]
    async fn test_tie_break_falls_back_to_posting_id() {
        let store = InMemoryStore::new();
        let shared_time = Utc::now();
        for id in ["post-c", "post-a", "post-b"] {
            let mut p = posting(id, "Data Analyst");
            p.created_at = shared_time;
            store.upsert_posting(&p).await.unwrap();
        }

        let filter = title_filter("analyst");
        let page = store
            .search_postings(&filter, &ScoreExpr::default(), 10, 0)
            .await
            .unwrap();

        let ids: Vec<&str> = page
            .rows
            .iter()
            .map(|r| r.posting.posting_id.as_str())
            .collect();
        assert_eq!(ids, vec!["post-a", "post-b", "post-c"]);
    }

    #[tokio::test]
    async fn test_pagination_windows_are_disjoint_and_complete() {
        let store = InMemoryStore::new();
        let shared_time = Utc::now();
        for i in 0..9 {
            let mut p = posting(&format!("post-{i}"), "Recruiter");
            p.created_at = shared_time;
            store.upsert_posting(&p).await.unwrap();
        }

        let filter = title_filter("recruiter");
        let score = ScoreExpr::default();

        let mut seen = Vec::new();
        let mut offset = 0;
        loop {
            let page = store
                .search_postings(&filter, &score, 4, offset)
                .await
                .unwrap();
            if page.rows.is_empty() {
                break;
            }
            for row in &page.rows {
                assert!(!seen.contains(&row.posting.posting_id));
                seen.push(row.posting.posting_id.clone());
            }
            offset += 4;
        }

        assert_eq!(seen.len(), 9);
    }
}
