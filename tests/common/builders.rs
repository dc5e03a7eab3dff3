//! Test builders — ergonomic constructors for catalogs and result sets.
//!
//! These builders favour readability in assertions over flexibility. They
//! panic on invalid input rather than returning `Result`.

use annoscope_core::{CatalogEntry, CatalogIndex, MatchedEntity, PartialDocument, ResultSet};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// CatalogBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`CatalogIndex`] fixtures.
///
/// # Example
///
/// ```rust
/// let catalog = CatalogBuilder::new()
///     .taxon("http://purl.obolibrary.org/obo/NCBITaxon_4565", "Triticum aestivum")
///     .phenotype("http://opendata.inrae.fr/wto/0000005", "grain yield")
///     .build();
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    entries: Vec<CatalogEntry>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, uri: &str, label: &str, source: &str) -> Self {
        self.entries.push(CatalogEntry {
            concept_uri: uri.to_string(),
            label: label.to_string(),
            preferred_label: None,
            source: source.to_string(),
            document_count: 1,
        });
        self
    }

    pub fn taxon(self, uri: &str, label: &str) -> Self {
        self.entry(uri, label, "Taxon")
    }

    pub fn phenotype(self, uri: &str, label: &str) -> Self {
        self.entry(uri, label, "Phenotype or trait")
    }

    /// Alternate label of an already-known concept.
    pub fn alt_label(mut self, uri: &str, label: &str, preferred: &str) -> Self {
        self = self.taxon(uri, label);
        if let Some(last) = self.entries.last_mut() {
            last.preferred_label = Some(preferred.to_string());
        }
        self
    }

    pub fn labels(mut self, labels: &[&str]) -> Self {
        for (i, label) in labels.iter().enumerate() {
            self = self.taxon(&format!("urn:concept:{i}"), label);
        }
        self
    }

    pub fn build(self) -> CatalogIndex {
        CatalogIndex::new(self.entries)
    }

    pub fn shared(self) -> Arc<CatalogIndex> {
        Arc::new(self.build())
    }
}

// ---------------------------------------------------------------------------
// Result rows
// ---------------------------------------------------------------------------

/// A result row for `doc` matched by a single concept.
pub fn row(doc: &str, concept: &str) -> PartialDocument {
    let label = format!("label of {concept}");
    row_with(doc, &[(concept, label.as_str())])
}

/// A result row for `doc` matched by several concepts.
pub fn row_with(doc: &str, entities: &[(&str, &str)]) -> PartialDocument {
    PartialDocument {
        document_uri: doc.to_string(),
        title: format!("Title of {doc}"),
        date: "2021".to_string(),
        authors: vec!["Rival, Alain".to_string(), "Doe, Jane".to_string()],
        matched_entities: entities
            .iter()
            .map(|(uri, label)| MatchedEntity::new(*uri, *label))
            .collect(),
    }
}

/// A result set with one row per document, all matched by `concept`.
pub fn result_set(concept: &str, docs: &[&str]) -> ResultSet {
    docs.iter().map(|d| row(d, concept)).collect()
}

pub fn uris(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
