//! AutocompleteMatcher — search-as-you-type over catalog labels.
//!
//! Two passes over the catalog, both case-insensitive on `label` only:
//! labels starting with the input first, then labels merely containing it.
//! Each pass is sorted by lower-cased label; the sort is stable so ties keep
//! catalog order. A `(conceptURI, label)` pair is emitted at most once and the
//! total never exceeds the cap. The contains pass also skips entries whose
//! URI and lower-cased label match a prefix hit, so case variants of a prefix
//! hit are not offered twice.

use crate::catalog::CatalogIndex;
use crate::types::{CatalogEntry, SearchHit};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AutocompleteMatcher {
    catalog: Arc<CatalogIndex>,
}

impl AutocompleteMatcher {
    pub fn new(catalog: Arc<CatalogIndex>) -> Self {
        Self { catalog }
    }

    pub fn search(&self, input: &str, cap: usize) -> Vec<SearchHit> {
        if cap == 0 {
            return Vec::new();
        }
        let needle = input.to_lowercase();
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut prefixed: HashSet<(&str, &str)> = HashSet::new();

        let mut starts_with: Vec<(&CatalogEntry, &str)> = Vec::new();
        for (entry, lowered) in self.catalog.labelled() {
            if starts_with.len() == cap {
                break;
            }
            if lowered.starts_with(&needle) && seen.insert(pair(entry)) {
                prefixed.insert((entry.concept_uri.as_str(), lowered));
                starts_with.push((entry, lowered));
            }
        }
        sort_by_label(&mut starts_with);

        let mut contains: Vec<(&CatalogEntry, &str)> = Vec::new();
        let room = cap - starts_with.len();
        if room > 0 {
            for (entry, lowered) in self.catalog.labelled() {
                if contains.len() == room {
                    break;
                }
                if lowered.contains(&needle)
                    && !prefixed.contains(&(entry.concept_uri.as_str(), lowered))
                    && seen.insert(pair(entry))
                {
                    contains.push((entry, lowered));
                }
            }
            sort_by_label(&mut contains);
        }

        tracing::debug!(
            input,
            starts_with = starts_with.len(),
            contains = contains.len(),
            "autocomplete"
        );
        starts_with
            .into_iter()
            .chain(contains)
            .map(|(entry, _)| SearchHit::from(entry))
            .collect()
    }
}

fn pair(entry: &CatalogEntry) -> (&str, &str) {
    (entry.concept_uri.as_str(), entry.label.as_str())
}

fn sort_by_label(hits: &mut [(&CatalogEntry, &str)]) {
    hits.sort_by(|a, b| a.1.cmp(b.1));
}
