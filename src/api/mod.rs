pub mod handlers;
pub mod routes;

pub use routes::build_router;

use crate::ingestion::Ingestor;
use crate::outreach::OutreachService;
use crate::search::SearchService;
use crate::state::PostingStore;
use std::sync::Arc;

/// Shared application state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostingStore>,
    pub search: Arc<SearchService>,
    pub ingestor: Arc<Ingestor>,
    pub outreach: Option<Arc<OutreachService>>,
}
