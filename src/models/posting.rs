use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Payload keys the search engine understands.
pub const FIELD_TITLE: &str = "job_title";
pub const FIELD_FUNCTION: &str = "job_function";
pub const FIELD_SUMMARY: &str = "job_summary";
pub const FIELD_LOCATION: &str = "job_location";
pub const FIELD_SUITABILITY: &str = "suitability_score";

/// The searchable text fields of a posting payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Title,
    Function,
    Summary,
    Location,
}

impl TextField {
    /// Payload key this field reads from.
    pub fn key(self) -> &'static str {
        match self {
            TextField::Title => FIELD_TITLE,
            TextField::Function => FIELD_FUNCTION,
            TextField::Summary => FIELD_SUMMARY,
            TextField::Location => FIELD_LOCATION,
        }
    }
}

/// Represents a job posting in the system
///
/// Postings are written by the ingestion collaborator (insert-if-absent keyed
/// on `posting_id`) and are read-only from the search engine's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    /// Unique internal identifier
    pub id: Uuid,

    /// Unique external identifier (ingestion key)
    pub posting_id: String,

    /// Semi-structured payload (job_title, job_function, job_summary,
    /// job_location, optional numeric suitability_score, anything else the
    /// collector scraped)
    pub fields: HashMap<String, serde_json::Value>,

    /// Derived flag: a contact email was discovered for this posting.
    /// Invariant at ingestion time: true implies `contact_email` is present
    /// and non-empty. The reverse does not hold; emails may be cleared
    /// independently, so the flag and the value must be checked separately.
    #[serde(default)]
    pub has_contact_email: bool,

    /// Discovered contact email, if any
    pub contact_email: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    /// Create a new posting from ingested payload fields
    pub fn new(posting_id: String, fields: HashMap<String, serde_json::Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            posting_id,
            fields,
            has_contact_email: false,
            contact_email: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a discovered contact email and derive the flag
    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.has_contact_email = !email.trim().is_empty();
        self.contact_email = Some(email);
        self
    }

    /// Text value of a searchable payload field.
    ///
    /// Returns `None` for a missing key or a non-string value; malformed
    /// documents contribute nothing to filtering or scoring but are never
    /// rejected.
    pub fn text_field(&self, field: TextField) -> Option<&str> {
        self.fields.get(field.key()).and_then(|v| v.as_str())
    }

    /// Normalized suitability score, if the payload carries a numeric one.
    pub fn suitability_score(&self) -> Option<f64> {
        self.fields.get(FIELD_SUITABILITY).and_then(|v| v.as_f64())
    }

    /// Whether a non-empty contact email is stored.
    pub fn contact_email_present(&self) -> bool {
        self.contact_email
            .as_deref()
            .is_some_and(|e| !e.trim().is_empty())
    }
}
