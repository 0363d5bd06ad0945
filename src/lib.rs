//! jobscout: relevance-ranked search and outreach over job postings
//!
//! Ingests job-posting records, serves deterministic multi-factor relevance
//! search over them, and emails discovered contacts. The search engine is the
//! heart of the crate; see [`search`] for its architecture.

pub mod api;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod models;
pub mod outreach;
pub mod search;
pub mod state;
