//! Posting ingestion boundary
//!
//! The collector hands over parsed posting records; this module derives the
//! contact-email flag and writes them with insert-if-absent semantics. CSV
//! parsing, deduplication heuristics, and scheduling live upstream of this
//! boundary.

use crate::error::Result;
use crate::models::JobPosting;
use crate::state::PostingStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// One raw posting record as delivered by the collector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostingRecord {
    /// External identifier; records with a blank id are skipped
    pub posting_id: String,

    /// Semi-structured payload fields
    #[serde(default)]
    pub fields: HashMap<String, serde_json::Value>,

    /// Discovered contact email, if any
    pub contact_email: Option<String>,
}

/// Outcome of an ingestion batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestSummary {
    pub inserted: u64,
    pub updated: u64,
    pub skipped: u64,
}

/// Writes posting records into the store
pub struct Ingestor {
    store: Arc<dyn PostingStore>,
}

impl Ingestor {
    pub fn new(store: Arc<dyn PostingStore>) -> Self {
        Self { store }
    }

    /// Ingest a batch of records.
    ///
    /// Each record is upserted keyed on `posting_id`: new ids insert, known
    /// ids refresh payload and contact data in place. The contact-email flag
    /// is derived here, never trusted from the record. Blank-id records are
    /// counted and skipped, never fatal.
    pub async fn ingest_batch(&self, records: Vec<PostingRecord>) -> Result<IngestSummary> {
        let mut summary = IngestSummary::default();

        for record in records {
            if record.posting_id.trim().is_empty() {
                summary.skipped += 1;
                tracing::warn!("Skipping record with blank posting_id");
                continue;
            }

            let mut posting = JobPosting::new(record.posting_id, record.fields);
            if let Some(email) = record.contact_email {
                posting = posting.with_contact_email(email);
            }

            if self.store.upsert_posting(&posting).await? {
                summary.inserted += 1;
            } else {
                summary.updated += 1;
            }
        }

        tracing::info!(
            inserted = summary.inserted,
            updated = summary.updated,
            skipped = summary.skipped,
            "Ingestion batch complete"
        );
        Ok(summary)
    }
}
