use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::ingestion::{IngestSummary, PostingRecord};
use crate::models::JobPosting;
use crate::search::{EmailFilter, SearchQuery, SearchResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

/// Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Search postings
///
/// Rejects requests carrying none of the three selector parameters at all;
/// selectors that are present but blank fall through to the engine, which
/// answers them with an empty result.
pub async fn search_postings(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    if params.text.is_none() && params.location.is_none() && params.email_filter.is_none() {
        return Err(AppError::Validation(
            "At least one of text, location, email_filter is required".to_string(),
        ));
    }

    let query = SearchQuery::new(params.text.unwrap_or_default())
        .with_location(params.location.unwrap_or_default())
        .with_email_filter(params.email_filter.unwrap_or_default())
        .with_limit(params.limit.unwrap_or(crate::search::DEFAULT_LIMIT))
        // Negative offsets clamp to zero rather than erroring
        .with_offset(params.offset.unwrap_or(0).max(0) as usize);

    let response = state.search.search(&query).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub text: Option<String>,
    pub location: Option<String>,
    pub email_filter: Option<EmailFilter>,
    pub limit: Option<usize>,
    pub offset: Option<i64>,
}

/// Ingest a batch of posting records
pub async fn ingest_postings(
    State(state): State<AppState>,
    Json(request): Json<IngestRequest>,
) -> Result<(StatusCode, Json<IngestSummary>)> {
    if request.records.is_empty() {
        return Err(AppError::Validation("Empty ingestion batch".to_string()));
    }

    let summary = state.ingestor.ingest_batch(request.records).await?;
    Ok((StatusCode::ACCEPTED, Json(summary)))
}

#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub records: Vec<PostingRecord>,
}

/// Get a posting by external id
pub async fn get_posting(
    State(state): State<AppState>,
    Path(posting_id): Path<String>,
) -> Result<Json<JobPosting>> {
    let posting = state
        .store
        .get_posting(&posting_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Posting {} not found", posting_id)))?;
    Ok(Json(posting))
}

/// Send an outreach email to a posting's contact
pub async fn contact_posting(
    State(state): State<AppState>,
    Path(posting_id): Path<String>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>> {
    let outreach = state
        .outreach
        .as_ref()
        .ok_or_else(|| AppError::Configuration("Outreach email is disabled".to_string()))?;

    outreach
        .contact(&posting_id, &request.subject, &request.body)
        .await?;

    Ok(Json(ContactResponse {
        posting_id,
        sent: true,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub posting_id: String,
    pub sent: bool,
}
