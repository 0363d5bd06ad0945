//! Query planner and scorer
//!
//! Turns a search query plus its expanded tokens and related titles into two
//! independent artifacts: a [`FilterExpr`] deciding candidate admission and a
//! [`ScoreExpr`] ranking admitted candidates. Both are portable expression
//! trees evaluated by the store in a single pass over each document; the
//! planner itself never touches the store and cannot fail on well-formed
//! input.

use crate::models::{JobPosting, TextField};
use crate::search::query::{EmailFilter, SearchQuery};
use serde::{Deserialize, Serialize};

/// Phrase weights, summed into one scalar per document.
pub const WEIGHT_TITLE_PHRASE: u32 = 5;
pub const WEIGHT_TOKEN_TITLE: u32 = 3;
pub const WEIGHT_TOKEN_LOCATION: u32 = 4;
pub const WEIGHT_TOKEN_FUNCTION: u32 = 2;
pub const WEIGHT_TOKEN_SUMMARY: u32 = 1;
pub const WEIGHT_LOCATION_PHRASE: u32 = 6;

/// Boolean admission filter over posting fields.
///
/// A document must satisfy the whole tree to appear in results at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterExpr {
    /// All subexpressions must hold.
    And(Vec<FilterExpr>),

    /// At least one subexpression must hold.
    Or(Vec<FilterExpr>),

    /// Case-insensitive substring match on a payload text field. Missing or
    /// non-string values never match.
    Contains(TextField, String),

    /// The derived contact-email flag equals the given value. An unset flag
    /// deserializes to false, so `HasContactEmail(false)` also covers
    /// documents that never carried the flag.
    HasContactEmail(bool),

    /// A non-empty contact email is stored.
    ContactEmailPresent,

    /// The contact email is null or empty.
    ContactEmailMissing,
}

impl FilterExpr {
    /// Evaluate the filter against one stored document.
    pub fn matches(&self, posting: &JobPosting) -> bool {
        match self {
            FilterExpr::And(children) => children.iter().all(|c| c.matches(posting)),
            FilterExpr::Or(children) => children.iter().any(|c| c.matches(posting)),
            FilterExpr::Contains(field, needle) => posting
                .text_field(*field)
                .is_some_and(|text| text.to_lowercase().contains(needle)),
            FilterExpr::HasContactEmail(value) => posting.has_contact_email == *value,
            FilterExpr::ContactEmailPresent => posting.contact_email_present(),
            FilterExpr::ContactEmailMissing => !posting.contact_email_present(),
        }
    }
}

/// One weighted scoring clause: `weight` points when `field` contains
/// `needle` as a case-insensitive substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTerm {
    pub field: TextField,
    pub needle: String,
    pub weight: u32,
}

/// Composite score formula: the sum of all matching term weights.
///
/// Used only for ranking, never for admission. A document admitted by the
/// filter that matches no term scores 0 and still appears, ranked last among
/// ties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreExpr {
    pub terms: Vec<ScoreTerm>,
}

impl ScoreExpr {
    /// Evaluate the score formula against one stored document.
    ///
    /// Each term is evaluated independently and summed; a document matching
    /// three tokens in the title accumulates three title weights. Missing or
    /// malformed fields contribute 0.
    pub fn evaluate(&self, posting: &JobPosting) -> u32 {
        self.terms
            .iter()
            .filter(|term| {
                posting
                    .text_field(term.field)
                    .is_some_and(|text| text.to_lowercase().contains(&term.needle))
            })
            .map(|term| term.weight)
            .sum()
    }

    fn push(&mut self, field: TextField, needle: &str, weight: u32) {
        self.terms.push(ScoreTerm {
            field,
            needle: needle.to_string(),
            weight,
        });
    }
}

/// Build the admission filter and ranking formula for one request.
///
/// `tokens` and `related_titles` must come from the same query text
/// (expander and title index respectively); their iteration order determines
/// clause order, so deterministic inputs produce identical plans.
///
/// Callers must not invoke the planner for selector-less queries; the engine
/// short-circuits those to an empty result before planning.
pub fn plan(
    query: &SearchQuery,
    tokens: &[String],
    related_titles: &[&str],
) -> (FilterExpr, ScoreExpr) {
    let text = query.text.trim().to_lowercase();
    let location = query.location.trim().to_lowercase();

    let mut conjuncts: Vec<FilterExpr> = Vec::new();
    let mut score = ScoreExpr::default();

    if !text.is_empty() {
        // Mandatory title gate: raw phrase, related title, or expanded token
        // as a title substring. A token matching only in another field never
        // admits a document.
        let mut gate: Vec<FilterExpr> = Vec::new();
        gate.push(FilterExpr::Contains(TextField::Title, text.clone()));
        for title in related_titles {
            gate.push(FilterExpr::Contains(TextField::Title, title.to_lowercase()));
        }
        for token in tokens {
            gate.push(FilterExpr::Contains(TextField::Title, token.clone()));
        }
        conjuncts.push(FilterExpr::Or(gate));

        score.push(TextField::Title, &text, WEIGHT_TITLE_PHRASE);
        for token in tokens {
            score.push(TextField::Title, token, WEIGHT_TOKEN_TITLE);
            score.push(TextField::Location, token, WEIGHT_TOKEN_LOCATION);
            score.push(TextField::Function, token, WEIGHT_TOKEN_FUNCTION);
            score.push(TextField::Summary, token, WEIGHT_TOKEN_SUMMARY);
        }
    }

    if !location.is_empty() {
        conjuncts.push(FilterExpr::Contains(TextField::Location, location.clone()));
        score.push(TextField::Location, &location, WEIGHT_LOCATION_PHRASE);
    }

    match query.email_filter {
        EmailFilter::Any => {}
        // Present and Absent are deliberately not complements: a posting
        // with the flag set but an empty email matches neither branch.
        EmailFilter::Present => conjuncts.push(FilterExpr::And(vec![
            FilterExpr::HasContactEmail(true),
            FilterExpr::ContactEmailPresent,
        ])),
        EmailFilter::Absent => conjuncts.push(FilterExpr::Or(vec![
            FilterExpr::HasContactEmail(false),
            FilterExpr::ContactEmailMissing,
        ])),
    }

    (FilterExpr::And(conjuncts), score)
}
