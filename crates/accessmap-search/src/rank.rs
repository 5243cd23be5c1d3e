//! Score-and-sort ranking for the sidebar search box.
//!
//! More permissive than the chat entity matcher: query words are not
//! stop-word filtered, so "the hospital" still surfaces hospitals. The
//! weights are tunable constants preserved for behavioral compatibility
//! with the shipped UI, not load-bearing architecture.

use accessmap_core::types::ServiceLocation;
use tracing::debug;

pub const EXACT_NAME: u32 = 100;
pub const NAME_PREFIX: u32 = 50;
pub const NAME_WHOLE_WORD: u32 = 40;
pub const NAME_SUBSTRING: u32 = 30;
pub const NAME_WORD_PREFIX: u32 = 20;
pub const CATEGORY_CONTAINS: u32 = 15;
pub const ADDRESS_WORD_PREFIX: u32 = 10;
pub const ADDRESS_CONTAINS_QUERY: u32 = 8;
pub const DESCRIPTION_CONTAINS: u32 = 5;

/// Rank catalog entries against a free-text query, best first.
///
/// Empty or whitespace-only queries return an empty vec. Ties keep catalog
/// iteration order (stable sort), so repeated calls over an unchanged
/// catalog return identical output.
pub fn rank<'a>(query: &str, services: &'a [ServiceLocation], limit: usize) -> Vec<&'a ServiceLocation> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let query_words: Vec<&str> = query.split_whitespace().collect();

    let mut scored: Vec<(u32, &ServiceLocation)> = services
        .iter()
        .filter_map(|service| {
            let score = score_service(&query, &query_words, service);
            (score > 0).then_some((score, service))
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(limit);

    debug!("rank: {} hits for '{}'", scored.len(), query);
    scored.into_iter().map(|(_, s)| s).collect()
}

fn score_service(query: &str, query_words: &[&str], service: &ServiceLocation) -> u32 {
    let name = service.name.to_lowercase();
    let address = service.address.to_lowercase();
    let description = service.description.to_lowercase();
    let category = service.category.as_str();

    let mut score = 0;

    // Name signals are mutually exclusive, strongest first.
    if name == query {
        score += EXACT_NAME;
    } else if name.starts_with(query) {
        score += NAME_PREFIX;
    } else if contains_whole_word(&name, query) {
        score += NAME_WHOLE_WORD;
    } else if name.contains(query) {
        score += NAME_SUBSTRING;
    }

    // Per-word signals: each criterion counts at most once per query word.
    for word in query_words {
        if word.len() < 2 {
            continue;
        }
        if name.split_whitespace().any(|w| w.starts_with(word)) {
            score += NAME_WORD_PREFIX;
        }
        if address.split_whitespace().any(|w| w.starts_with(word)) {
            score += ADDRESS_WORD_PREFIX;
        }
        if category.contains(word) {
            score += CATEGORY_CONTAINS;
        }
        if description.contains(word) {
            score += DESCRIPTION_CONTAINS;
        }
    }

    if address.contains(query) {
        score += ADDRESS_CONTAINS_QUERY;
    }

    score
}

/// True when `needle` appears in `haystack` bounded by spaces (or the string
/// edges) on both sides.
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    let padded = format!(" {haystack} ");
    padded.contains(&format!(" {needle} "))
}
