//! Fixed stop-word set.
//!
//! Exact membership is a behavioral contract: the set exists to stop generic
//! words ("service", "centre", "hospital") from matching every catalog entry
//! of that category, trading a little recall for a lot of precision. Change
//! a word here and the entity-matcher rejection rules shift with it.

use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        // articles, pronouns, fillers
        "a", "an", "and", "the", "is", "are", "was", "were", "be", "been",
        "it", "its", "this", "that", "these", "those", "there", "here",
        "i", "im", "me", "my", "we", "our", "you", "your", "they", "them",
        "what", "which", "who", "whom", "whose", "when", "where", "how",
        "do", "does", "did", "can", "could", "will", "would", "should",
        "please", "show", "tell", "find",
        // prepositions and connectives
        "at", "by", "for", "from", "in", "into", "of", "on", "to", "with",
        "near", "nearby", "around", "about",
        // generic service-domain nouns
        "service", "services", "centre", "center", "hospital", "clinic",
        "clinics", "location", "locations", "place", "places",
        // the city itself; every address and half the names contain it
        "kingston", "ontario",
        // corporate suffixes
        "inc", "ltd", "co", "corp",
    ])
});

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_membership() {
        assert!(is_stop_word("service"));
        assert!(is_stop_word("centre"));
        assert!(is_stop_word("hospital"));
        assert!(is_stop_word("kingston"));
        assert!(is_stop_word("inc"));
        // Discriminative words stay out.
        assert!(!is_stop_word("general"));
        assert!(!is_stop_word("grocery"));
        assert!(!is_stop_word("stuart"));
        assert!(!is_stop_word("library"));
    }
}
