#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! accessmap-text
//!
//! Canonical text normalization and tokenization shared by the search ranker
//! and the chat entity matcher. Both sides must see identical token streams
//! for the same input, so this lives in its own crate.

pub mod stopwords;

/// Canonical form of arbitrary user/catalog text: lower-case, `&` spelled out
/// as "and", everything outside `[a-z0-9 ]` stripped, whitespace collapsed.
/// Total function; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch == '&' {
            // "A & B" and "A and B" must normalize identically.
            push_word(&mut out, "and", &mut pending_space);
            continue;
        }
        let lowered = ch.to_ascii_lowercase();
        if lowered.is_ascii_lowercase() || lowered.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(lowered);
        } else {
            // Whitespace and punctuation both act as separators.
            pending_space = true;
        }
    }
    out
}

fn push_word(out: &mut String, word: &str, pending_space: &mut bool) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
    *pending_space = true;
}

/// Normalize, split on whitespace, drop tokens shorter than 2 characters and
/// tokens in the stop-word set. Order is preserved; matching treats the
/// result as a set.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|t| t.len() >= 2 && !stopwords::is_stop_word(t))
        .map(str::to_string)
        .collect()
}
