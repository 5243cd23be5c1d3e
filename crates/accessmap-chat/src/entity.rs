//! Resolving free text to a specific catalog record.
//!
//! Two passes. The direct-substring pass catches users typing the exact
//! official name, possibly surrounded by other words; it is deterministic
//! and takes priority. The token-overlap pass handles partial or rephrased
//! references ("kingston general" for "Kingston General Hospital"). The
//! ≥2-token rule — with an exception for a single strong token of length
//! ≥ 4 — keeps one generic shared word from matching half the catalog.

use accessmap_core::types::ServiceLocation;
use accessmap_search::index::{IndexEntry, SearchIndex};
use accessmap_text::{normalize, tokenize};
use tracing::debug;

const ADDRESS_BONUS_CAP: f64 = 0.15;
const ADDRESS_BONUS_PER_TOKEN: f64 = 0.05;

pub fn find_best_service_match<'a>(
    text: &str,
    index: &SearchIndex<'a>,
) -> Option<&'a ServiceLocation> {
    let normalized_input = normalize(text);
    if normalized_input.is_empty() {
        return None;
    }

    if let Some(found) = direct_substring_pass(&normalized_input, index) {
        debug!("entity: direct match '{}'", found.name);
        return Some(found);
    }
    token_overlap_pass(text, index)
}

/// Longest normalized name that appears whole inside the input; first
/// encountered wins ties.
fn direct_substring_pass<'a>(
    normalized_input: &str,
    index: &SearchIndex<'a>,
) -> Option<&'a ServiceLocation> {
    let mut best: Option<&IndexEntry<'a>> = None;
    for entry in index.entries() {
        if entry.normalized_name.is_empty() || !normalized_input.contains(&entry.normalized_name) {
            continue;
        }
        if best.is_none_or(|b| entry.normalized_name.len() > b.normalized_name.len()) {
            best = Some(entry);
        }
    }
    best.map(|e| e.service)
}

fn token_overlap_pass<'a>(text: &str, index: &SearchIndex<'a>) -> Option<&'a ServiceLocation> {
    let input_tokens = tokenize(text);
    if input_tokens.is_empty() {
        return None;
    }

    let mut best: Option<(f64, usize, &IndexEntry<'a>)> = None;
    for entry in index.entries() {
        if entry.name_tokens.is_empty() {
            continue;
        }
        let name_matches = entry
            .name_tokens
            .iter()
            .filter(|t| input_tokens.contains(*t))
            .count();
        if name_matches == 0 {
            continue;
        }

        let strong_single_token =
            entry.name_tokens.len() == 1 && entry.name_tokens[0].len() >= 4 && name_matches == 1;
        if name_matches < 2 && !strong_single_token {
            continue;
        }

        let address_matches = entry
            .address_tokens
            .iter()
            .filter(|t| input_tokens.contains(*t))
            .count();

        #[allow(clippy::cast_precision_loss)]
        let score = name_matches as f64 / entry.name_tokens.len() as f64
            + ADDRESS_BONUS_CAP.min(address_matches as f64 * ADDRESS_BONUS_PER_TOKEN);

        let better = match &best {
            None => true,
            Some((best_score, best_addr, best_entry)) => {
                score > *best_score
                    || (score == *best_score && address_matches > *best_addr)
                    || (score == *best_score
                        && address_matches == *best_addr
                        && entry.normalized_name.len() > best_entry.normalized_name.len())
            }
        };
        if better {
            best = Some((score, address_matches, entry));
        }
    }

    best.map(|(score, _, e)| {
        debug!("entity: token match '{}' (score {:.2})", e.service.name, score);
        e.service
    })
}
