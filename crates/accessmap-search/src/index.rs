//! Derived search index over a catalog snapshot.
//!
//! Entries borrow the catalog; the index is a pure function of it. Owners
//! rebuild the index when (and only when) the catalog reference changes —
//! there is no hidden global cache to leak state between callers.

use accessmap_core::types::ServiceLocation;
use accessmap_text::{normalize, tokenize};

/// Pre-tokenized view of one catalog entry.
pub struct IndexEntry<'a> {
    pub service: &'a ServiceLocation,
    pub normalized_name: String,
    pub name_tokens: Vec<String>,
    pub address_tokens: Vec<String>,
}

pub struct SearchIndex<'a> {
    entries: Vec<IndexEntry<'a>>,
}

impl<'a> SearchIndex<'a> {
    pub fn build(services: &'a [ServiceLocation]) -> Self {
        let entries = services
            .iter()
            .map(|service| IndexEntry {
                service,
                normalized_name: normalize(&service.name),
                name_tokens: tokenize(&service.name),
                address_tokens: tokenize(&service.address),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[IndexEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
