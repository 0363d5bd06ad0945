//! End-to-end tests for the posting search engine

use jobscout::config::SearchConfig;
use jobscout::ingestion::{Ingestor, PostingRecord};
use jobscout::models::JobPosting;
use jobscout::search::{EmailFilter, SearchQuery, SearchResponse, SearchService};
use jobscout::state::{InMemoryStore, PostingStore};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// Helper to create a test search service over a fresh store
fn create_test_service() -> (Arc<InMemoryStore>, SearchService) {
    let store = Arc::new(InMemoryStore::new());
    let service = SearchService::new(store.clone(), SearchConfig::default());
    (store, service)
}

/// Helper to create a test posting
fn create_test_posting(
    posting_id: &str,
    title: &str,
    function: &str,
    summary: &str,
    location: &str,
) -> JobPosting {
    let mut fields = HashMap::new();
    fields.insert("job_title".to_string(), json!(title));
    fields.insert("job_function".to_string(), json!(function));
    fields.insert("job_summary".to_string(), json!(summary));
    fields.insert("job_location".to_string(), json!(location));
    JobPosting::new(posting_id.to_string(), fields)
}

async fn seed(store: &Arc<InMemoryStore>, postings: Vec<JobPosting>) {
    for posting in postings {
        store.upsert_posting(&posting).await.unwrap();
    }
}

fn title_of(response: &SearchResponse, index: usize) -> String {
    response.hits[index]
        .fields
        .get("job_title")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_blank_selectors_return_empty_result() {
    let (_, service) = create_test_service();

    let query = SearchQuery::new("   \t")
        .with_location("")
        .with_email_filter(EmailFilter::Any);
    let response = service.search(&query).await.unwrap();

    assert_eq!(response.total_count, 0);
    assert!(response.hits.is_empty());
}

#[tokio::test]
async fn test_title_gate_is_never_violated() {
    let (store, service) = create_test_service();
    seed(
        &store,
        vec![
            create_test_posting(
                "p1",
                "Senior Software Engineer",
                "Engineering",
                "Build backend services",
                "Seattle, WA",
            ),
            create_test_posting(
                "p2",
                "Office Coordinator",
                "Administration",
                // Token appears in the summary only; must not be admitted
                "Work closely with our software engineer team",
                "Seattle, WA",
            ),
            create_test_posting(
                "p3",
                "Registered Nurse",
                "Healthcare",
                "Patient care",
                "Seattle, WA",
            ),
        ],
    )
    .await;

    let response = service
        .search(&SearchQuery::new("software engineer"))
        .await
        .unwrap();

    assert_eq!(response.total_count, 1);
    assert_eq!(response.hits[0].posting_id, "p1");
}

#[tokio::test]
async fn test_example_two_professions_do_not_cross_match() {
    // A software query must never admit a nursing posting, and vice versa
    let (store, service) = create_test_service();
    seed(
        &store,
        vec![
            create_test_posting("eng", "Senior Software Engineer", "", "", ""),
            create_test_posting("rn", "Registered Nurse", "", "", ""),
        ],
    )
    .await;

    let response = service
        .search(&SearchQuery::new("software engineer"))
        .await
        .unwrap();

    assert_eq!(response.total_count, 1);
    assert_eq!(response.hits[0].posting_id, "eng");
    assert!(response.hits[0].score > 0);
}

#[tokio::test]
async fn test_example_location_only_search() {
    // A location-only query scores exactly the location phrase weight
    let (store, service) = create_test_service();
    seed(
        &store,
        vec![
            create_test_posting("sea", "Barista", "", "", "Seattle, WA"),
            create_test_posting("aus", "Barista", "", "", "Austin, TX"),
        ],
    )
    .await;

    let response = service
        .search(&SearchQuery::new("").with_location("Seattle"))
        .await
        .unwrap();

    assert_eq!(response.total_count, 1);
    assert_eq!(response.hits[0].posting_id, "sea");
    assert_eq!(response.hits[0].score, 6);
}

#[tokio::test]
async fn test_example_email_present_excludes_empty_string_email() {
    // A posting with has_contact_email=true but an empty email string is not
    // "present"; it falls through to the absent side via its empty email
    let (store, service) = create_test_service();

    let mut stale = create_test_posting("stale", "Chef", "", "", "");
    stale.has_contact_email = true;
    stale.contact_email = Some(String::new());

    let good = create_test_posting("good", "Chef", "", "", "")
        .with_contact_email("chef@example.com");

    seed(&store, vec![stale, good]).await;

    let present = service
        .search(&SearchQuery::new("").with_email_filter(EmailFilter::Present))
        .await
        .unwrap();
    assert_eq!(present.total_count, 1);
    assert_eq!(present.hits[0].posting_id, "good");

    let absent = service
        .search(&SearchQuery::new("").with_email_filter(EmailFilter::Absent))
        .await
        .unwrap();
    // The stale posting falls into the absent branch via its empty email
    assert_eq!(absent.total_count, 1);
    assert_eq!(absent.hits[0].posting_id, "stale");
}

#[tokio::test]
async fn test_example_tie_break_pagination() {
    // Three equal-score, equal-timestamp matches; limit=1, offset=1 returns
    // exactly the second row in tie-break order
    let (store, service) = create_test_service();
    let shared_time: DateTime<Utc> = Utc::now();

    for id in ["post-b", "post-c", "post-a"] {
        let mut posting = create_test_posting(id, "Data Analyst", "", "", "");
        posting.created_at = shared_time;
        store.upsert_posting(&posting).await.unwrap();
    }

    let response = service
        .search(&SearchQuery::new("data analyst").with_limit(1).with_offset(1))
        .await
        .unwrap();

    assert_eq!(response.total_count, 3);
    assert_eq!(response.hits.len(), 1);
    // Equal score and timestamp fall back to posting_id ascending
    assert_eq!(response.hits[0].posting_id, "post-b");
}

#[tokio::test]
async fn test_total_count_invariant_under_pagination() {
    let (store, service) = create_test_service();
    for i in 0..12 {
        store
            .upsert_posting(&create_test_posting(
                &format!("p{i:02}"),
                "QA Engineer",
                "Engineering",
                "",
                "Remote",
            ))
            .await
            .unwrap();
    }

    let narrow = service
        .search(&SearchQuery::new("qa engineer").with_limit(1))
        .await
        .unwrap();
    let wide = service
        .search(&SearchQuery::new("qa engineer").with_limit(100))
        .await
        .unwrap();
    let offset = service
        .search(&SearchQuery::new("qa engineer").with_limit(5).with_offset(10))
        .await
        .unwrap();

    assert_eq!(narrow.total_count, 12);
    assert_eq!(wide.total_count, 12);
    assert_eq!(offset.total_count, 12);
    assert_eq!(narrow.hits.len(), 1);
    assert_eq!(wide.hits.len(), 12);
    assert_eq!(offset.hits.len(), 2);
}

#[tokio::test]
async fn test_repeated_search_is_idempotent() {
    let (store, service) = create_test_service();
    seed(
        &store,
        vec![
            create_test_posting("p1", "Backend Developer", "Engineering", "APIs", "Denver, CO"),
            create_test_posting("p2", "Senior Backend Developer", "Engineering", "", "Denver, CO"),
            create_test_posting("p3", "Frontend Developer", "Engineering", "", "Denver, CO"),
        ],
    )
    .await;

    let query = SearchQuery::new("backend developer").with_location("Denver");
    let first = service.search(&query).await.unwrap();
    let second = service.search(&query).await.unwrap();

    let ids_and_scores = |r: &SearchResponse| -> Vec<(String, u32)> {
        r.hits
            .iter()
            .map(|h| (h.posting_id.clone(), h.score))
            .collect()
    };
    assert_eq!(ids_and_scores(&first), ids_and_scores(&second));
    assert_eq!(first.total_count, second.total_count);
}

#[tokio::test]
async fn test_pagination_is_complete_and_duplicate_free() {
    let (store, service) = create_test_service();
    for i in 0..23 {
        store
            .upsert_posting(&create_test_posting(
                &format!("p{i:02}"),
                "Recruiter",
                "People",
                "",
                "",
            ))
            .await
            .unwrap();
    }

    let mut collected: Vec<String> = Vec::new();
    let limit = 7;
    let mut offset = 0;
    loop {
        let page = service
            .search(
                &SearchQuery::new("recruiter")
                    .with_limit(limit)
                    .with_offset(offset),
            )
            .await
            .unwrap();
        if page.hits.is_empty() {
            break;
        }
        assert_eq!(page.total_count, 23);
        for hit in &page.hits {
            assert!(
                !collected.contains(&hit.posting_id),
                "duplicate row across pages"
            );
            collected.push(hit.posting_id.clone());
        }
        offset += limit;
    }

    assert_eq!(collected.len(), 23);
}

#[tokio::test]
async fn test_ranking_prefers_stronger_title_matches() {
    let (store, service) = create_test_service();
    seed(
        &store,
        vec![
            // Exact phrase in title: phrase + both tokens
            create_test_posting("exact", "Software Engineer", "Engineering", "", ""),
            // Only one token in title
            create_test_posting("partial", "Engineer", "Engineering", "", ""),
        ],
    )
    .await;

    let response = service
        .search(&SearchQuery::new("software engineer"))
        .await
        .unwrap();

    assert_eq!(response.total_count, 2);
    assert_eq!(response.hits[0].posting_id, "exact");
    assert!(response.hits[0].score > response.hits[1].score);
}

#[tokio::test]
async fn test_synonym_expansion_widens_the_gate() {
    let (store, service) = create_test_service();
    seed(
        &store,
        vec![create_test_posting(
            "p1",
            "Software Developer",
            "Engineering",
            "",
            "",
        )],
    )
    .await;

    // "engineer" expands to "developer", which matches the title
    let response = service.search(&SearchQuery::new("engineer")).await.unwrap();
    assert_eq!(response.total_count, 1);
    assert_eq!(title_of(&response, 0), "Software Developer");
}

#[tokio::test]
async fn test_related_titles_gate_category_queries() {
    let (store, service) = create_test_service();
    seed(
        &store,
        vec![
            create_test_posting("rn", "Registered Nurse - ICU", "Healthcare", "", ""),
            create_test_posting("acct", "Accountant", "Finance", "", ""),
        ],
    )
    .await;

    // The query text appears in neither title; the special mapping admits
    // the nursing posting only
    let response = service
        .search(&SearchQuery::new("healthcare"))
        .await
        .unwrap();
    assert_eq!(response.total_count, 1);
    assert_eq!(response.hits[0].posting_id, "rn");
}

#[tokio::test]
async fn test_malformed_posting_is_scored_as_zero_not_rejected() {
    let (store, service) = create_test_service();

    // Well-formed match
    seed(
        &store,
        vec![create_test_posting("ok", "Attorney", "Legal", "", "Chicago, IL")],
    )
    .await;

    // Malformed: title is a number, location missing entirely
    let mut broken = JobPosting::new("broken".to_string(), HashMap::new());
    broken.fields.insert("job_title".to_string(), json!(12345));
    store.upsert_posting(&broken).await.unwrap();

    // The malformed posting cannot pass the title gate, but the query as a
    // whole still succeeds
    let by_text = service.search(&SearchQuery::new("attorney")).await.unwrap();
    assert_eq!(by_text.total_count, 1);

    // Under an email-only filter the malformed posting is admitted and
    // scores zero
    let by_email = service
        .search(&SearchQuery::new("").with_email_filter(EmailFilter::Absent))
        .await
        .unwrap();
    assert_eq!(by_email.total_count, 2);
    let broken_hit = by_email
        .hits
        .iter()
        .find(|h| h.posting_id == "broken")
        .unwrap();
    assert_eq!(broken_hit.score, 0);
}

#[tokio::test]
async fn test_ingest_then_search_round_trip() {
    let (store, service) = create_test_service();
    let ingestor = Ingestor::new(store.clone());

    let mut fields = HashMap::new();
    fields.insert("job_title".to_string(), json!("Machine Learning Engineer"));
    fields.insert("job_location".to_string(), json!("San Francisco, CA"));

    ingestor
        .ingest_batch(vec![PostingRecord {
            posting_id: "ml-1".to_string(),
            fields,
            contact_email: Some("ml-hiring@example.com".to_string()),
        }])
        .await
        .unwrap();

    let response = service
        .search(
            &SearchQuery::new("machine learning")
                .with_location("San Francisco")
                .with_email_filter(EmailFilter::Present),
        )
        .await
        .unwrap();

    assert_eq!(response.total_count, 1);
    let hit = &response.hits[0];
    assert_eq!(hit.posting_id, "ml-1");
    assert!(hit.has_contact_email);
    assert_eq!(hit.contact_email.as_deref(), Some("ml-hiring@example.com"));
    // Title tokens, location tokens, and the location phrase all contribute
    assert!(hit.score > 6);
}
