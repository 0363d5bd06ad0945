//! Contact outreach boundary
//!
//! The downstream workflow that emails discovered contacts. The engine side
//! of the boundary is deliberately thin: load the posting, refuse those
//! without a contact email, send exactly once. Retry and backoff belong to
//! the mail relay, not here.

pub mod email;

pub use email::SmtpMailer;

use crate::error::{AppError, Result};
use crate::state::PostingStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Outbound mail transport
#[async_trait]
pub trait OutreachMailer: Send + Sync {
    /// Send one message. No internal retry.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Sends outreach messages to posting contacts
pub struct OutreachService {
    store: Arc<dyn PostingStore>,
    mailer: Arc<dyn OutreachMailer>,
}

impl OutreachService {
    pub fn new(store: Arc<dyn PostingStore>, mailer: Arc<dyn OutreachMailer>) -> Self {
        Self { store, mailer }
    }

    /// Email the contact of one posting.
    ///
    /// Fails with a validation error when the posting has no usable contact
    /// email; fails with not-found for unknown ids.
    pub async fn contact(&self, posting_id: &str, subject: &str, body: &str) -> Result<()> {
        let posting = self
            .store
            .get_posting(posting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Posting {} not found", posting_id)))?;

        let to = posting
            .contact_email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| {
                AppError::Validation(format!("Posting {} has no contact email", posting_id))
            })?;

        self.mailer.send(to, subject, body).await?;
        tracing::info!(posting_id = %posting_id, to = %to, "Outreach email sent");
        Ok(())
    }
}
