//! Token expander
//!
//! Normalizes raw query text into tokens and widens each through the static
//! synonym table. Pure and total: no store access, any input string is
//! accepted, the empty string expands to an empty set.

use crate::search::synonyms;

/// Expand raw query text into a deduplicated token set.
///
/// Normalization: lowercase, then split on any run of characters that is not
/// an ASCII letter, digit, or `+` ("c++" survives intact, "node.js" splits
/// into "node" and "js"). Each base token is retained and unioned with its
/// synonyms.
///
/// The returned vector has set semantics with stable first-seen order, so
/// filter and score clauses generated from it are deterministic for a given
/// input.
pub fn expand(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut push = |token: &str| {
        if !token.is_empty() && !tokens.iter().any(|t| t.as_str() == token) {
            tokens.push(token.to_string());
        }
    };

    let normalized = text.to_lowercase();
    for base in normalized.split(|c: char| !(c.is_ascii_alphanumeric() || c == '+')) {
        let base = base.trim();
        if base.is_empty() {
            continue;
        }
        push(base);
        if let Some(synonyms) = synonyms::lookup(base) {
            for synonym in synonyms {
                push(synonym);
            }
        }
    }

    tokens
}
