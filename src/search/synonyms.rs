//! Static synonym table for query expansion
//!
//! Maps a normalized token to the set of domain-equivalent terms it should
//! also search for. The mapping is many-to-many: one token can expand to
//! several synonyms and several tokens can share a canonical synonym. Lookups
//! are symmetric in effect only where both directions are listed; the table
//! is not required to be symmetric in storage.
//!
//! Loaded once at process start and never mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Token -> equivalent terms. Keys and values are lowercase.
static SYNONYMS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let entries: &[(&str, &[&str])] = &[
        // Engineering
        ("developer", &["engineer", "programmer", "dev"]),
        ("dev", &["developer", "engineer"]),
        ("engineer", &["developer", "programmer"]),
        ("programmer", &["developer", "engineer"]),
        ("software", &["swe", "software engineer"]),
        ("swe", &["software engineer", "developer"]),
        ("frontend", &["front end", "ui developer", "javascript"]),
        ("backend", &["back end", "server side"]),
        ("fullstack", &["full stack", "frontend", "backend"]),
        ("js", &["javascript", "node"]),
        ("javascript", &["js", "node"]),
        ("devops", &["sre", "site reliability", "infrastructure"]),
        ("sre", &["site reliability", "devops"]),
        ("qa", &["quality assurance", "tester", "sdet"]),
        ("tester", &["qa", "quality assurance"]),
        ("security", &["infosec", "cybersecurity"]),
        // Data & ML
        ("data", &["analytics", "data science"]),
        ("ml", &["machine learning", "data science"]),
        ("ai", &["artificial intelligence", "machine learning"]),
        ("analyst", &["analytics", "business intelligence"]),
        // Healthcare
        ("nurse", &["nursing", "rn", "registered nurse"]),
        ("rn", &["registered nurse", "nurse"]),
        ("doctor", &["physician", "md"]),
        ("physician", &["doctor", "md"]),
        ("therapist", &["therapy", "counselor"]),
        // Business
        ("sales", &["account executive", "business development"]),
        ("marketing", &["growth", "demand generation"]),
        ("hr", &["human resources", "people operations"]),
        ("recruiter", &["talent acquisition", "sourcer", "recruiting"]),
        ("pm", &["product manager", "project manager"]),
        ("manager", &["lead", "head"]),
        ("finance", &["financial", "accounting"]),
        ("accountant", &["accounting", "bookkeeper", "cpa"]),
        ("lawyer", &["attorney", "counsel"]),
        ("attorney", &["lawyer", "counsel"]),
        // Design
        ("designer", &["design", "ux", "ui"]),
        ("ux", &["user experience", "designer"]),
        ("ui", &["user interface", "designer"]),
        // Operations & services
        ("support", &["customer service", "help desk"]),
        ("admin", &["administrator", "administrative assistant"]),
        ("driver", &["delivery", "courier"]),
        ("warehouse", &["logistics", "fulfillment"]),
        ("teacher", &["instructor", "tutor", "educator"]),
        ("chef", &["cook", "culinary"]),
    ];
    entries.iter().copied().collect()
});

/// Synonyms for a normalized token, if any are known.
pub fn lookup(token: &str) -> Option<&'static [&'static str]> {
    SYNONYMS.get(token).copied()
}
