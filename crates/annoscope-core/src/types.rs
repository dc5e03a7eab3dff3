//! Core types for annoscope-core.
//!
//! This module defines the data shared across every layer: catalog entries,
//! the partial documents returned by a retrieval call, the merged
//! [`Document`] produced by intersection, autocomplete [`SearchHit`]s and the
//! closed [`Taxonomy`] set.

/// Source name returned by the resolver when no catalog entry matches.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// One known concept label, as loaded from a catalog snapshot.
///
/// The same `concept_uri` may appear several times with different `label`
/// values when the catalog lists alternate labels of one concept; in that case
/// `preferred_label` carries the concept's preferred form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub concept_uri: String,
    pub label: String,
    pub preferred_label: Option<String>,
    /// Name of the controlled vocabulary the concept belongs to.
    pub source: String,
    /// Number of knowledge-base documents annotated with this concept.
    pub document_count: u64,
}

/// A `(conceptURI, label)` pair attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchedEntity {
    pub concept_uri: String,
    pub label: String,
}

impl MatchedEntity {
    pub fn new(concept_uri: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            concept_uri: concept_uri.into(),
            label: label.into(),
        }
    }
}

/// One row of a [`ResultSet`]: a document found for a single input concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialDocument {
    pub document_uri: String,
    pub title: String,
    pub date: String,
    pub authors: Vec<String>,
    /// Concepts (the input concept or its sub-concepts) that matched.
    pub matched_entities: Vec<MatchedEntity>,
}

/// The raw output of one retrieval call, in the order the store returned it.
pub type ResultSet = Vec<PartialDocument>;

/// A document that satisfied every requested concept.
///
/// `matched_entities` is keyed by `concept_uri`: [`Document::merge_entity`]
/// never inserts a second entry for a URI already present. Insertion order is
/// preserved so output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub document_uri: String,
    pub title: String,
    pub date: String,
    pub authors: Vec<String>,
    pub matched_entities: Vec<MatchedEntity>,
}

impl Document {
    /// Promote a partial document, deduplicating its entities by URI.
    pub fn from_partial(partial: &PartialDocument) -> Self {
        let mut doc = Self {
            document_uri: partial.document_uri.clone(),
            title: partial.title.clone(),
            date: partial.date.clone(),
            authors: partial.authors.clone(),
            matched_entities: Vec::with_capacity(partial.matched_entities.len()),
        };
        doc.merge_entities(&partial.matched_entities);
        doc
    }

    /// Add `entity` unless its concept URI is already present. Returns `true`
    /// if the entity was inserted.
    pub fn merge_entity(&mut self, entity: &MatchedEntity) -> bool {
        if self.has_entity(&entity.concept_uri) {
            return false;
        }
        self.matched_entities.push(entity.clone());
        true
    }

    pub fn merge_entities(&mut self, entities: &[MatchedEntity]) {
        for entity in entities {
            self.merge_entity(entity);
        }
    }

    pub fn has_entity(&self, concept_uri: &str) -> bool {
        self.matched_entities
            .iter()
            .any(|e| e.concept_uri == concept_uri)
    }
}

/// A catalog entry projected for the autocomplete response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub concept_uri: String,
    pub label: String,
    pub preferred_label: Option<String>,
    pub document_count: u64,
}

impl From<&CatalogEntry> for SearchHit {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            concept_uri: entry.concept_uri.clone(),
            label: entry.label.clone(),
            preferred_label: entry.preferred_label.clone(),
            document_count: entry.document_count,
        }
    }
}

/// Controlled vocabularies that have a retrieval strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Taxonomy {
    /// Organism taxonomy (NCBI Taxon).
    Taxon,
    /// Phenotype and trait ontology.
    PhenotypeOrTrait,
}

impl Taxonomy {
    pub const ALL: [Taxonomy; 2] = [Taxonomy::Taxon, Taxonomy::PhenotypeOrTrait];

    /// Map a catalog `source` value onto a supported taxonomy.
    pub fn from_source(source: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == source)
    }

    /// The catalog `source` value for this taxonomy.
    pub fn as_str(self) -> &'static str {
        match self {
            Taxonomy::Taxon => "Taxon",
            Taxonomy::PhenotypeOrTrait => "Phenotype or trait",
        }
    }
}

impl std::fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
