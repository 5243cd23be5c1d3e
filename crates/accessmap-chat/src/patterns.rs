//! Fixed intent patterns.
//!
//! Static regexes compiled once; the `expect`s can only fire on a bad
//! pattern literal, which the tests below pin down.
#![allow(clippy::expect_used)]

use accessmap_core::types::ActionKind;
use accessmap_text::normalize;
use regex::Regex;
use std::sync::LazyLock;

static HOURS_INTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(hours?|open(?:ing)?|clos(?:e|ed|ing)|schedule)\b")
        .expect("static regex: hours intent")
});

static SHOW_ON_MAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(show|open|focus|view|see|put)\b.*\bmap\b").expect("static regex: show on map")
});

static DETAILS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(details?|info|information)\b").expect("static regex: details")
});

/// True when the input looks like a request for opening hours or schedule.
/// Runs on normalized text, so casing and punctuation never matter.
pub fn hours_intent(text: &str) -> bool {
    HOURS_INTENT.is_match(&normalize(text))
}

/// Detect a follow-up action referencing the previously matched service.
/// The map pattern wins over the details keywords; checked before the hours
/// intent in the per-turn flow.
pub fn action_intent(text: &str) -> Option<ActionKind> {
    let normalized = normalize(text);
    if SHOW_ON_MAP.is_match(&normalized) {
        Some(ActionKind::ShowOnMap)
    } else if DETAILS.is_match(&normalized) {
        Some(ActionKind::ShowDetails)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_intent_word_boundaries() {
        assert!(hours_intent("What are the HOURS for the library?"));
        assert!(hours_intent("when does it close?"));
        assert!(hours_intent("is the market open on sundays"));
        assert!(hours_intent("opening schedule please"));
        // Word boundaries: intent words embedded in larger words don't fire.
        assert!(!hours_intent("the reopened gallery"));
        assert!(!hours_intent("tell me a joke"));
        assert!(!hours_intent("where is the nearest bank"));
    }

    #[test]
    fn action_intent_prefers_map_over_details() {
        assert_eq!(action_intent("show it on the map"), Some(ActionKind::ShowOnMap));
        assert_eq!(action_intent("can you view that on the map?"), Some(ActionKind::ShowOnMap));
        assert_eq!(action_intent("more info please"), Some(ActionKind::ShowDetails));
        assert_eq!(action_intent("show me the details"), Some(ActionKind::ShowDetails));
        assert_eq!(action_intent("tell me a joke"), None);
    }
}
