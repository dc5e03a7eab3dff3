//! ResultIntersector — keep the documents every concept agreed on.
//!
//! The first successful result set (by input order) seeds the running
//! intersection and fixes the output order. Each later set filters it and
//! contributes its matched entities to the survivors. Lookups into a set go
//! through a per-set hash index, so the whole fold is linear in the total
//! number of rows.

use crate::dispatcher::Outcome;
use crate::error::SearchError;
use crate::types::{Document, PartialDocument, ResultSet};
use std::collections::HashMap;

/// Documents matching all successful concepts, plus the per-concept errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intersection {
    pub documents: Vec<Document>,
    pub errors: Vec<SearchError>,
}

pub fn intersect(outcomes: impl IntoIterator<Item = Outcome>) -> Intersection {
    let mut errors = Vec::new();
    let mut sets = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(set) => sets.push(set),
            Outcome::Failure(err) => errors.push(err),
        }
    }

    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        tracing::info!(errors = errors.len(), "no successful result set to intersect");
        return Intersection {
            documents: Vec::new(),
            errors,
        };
    };

    let mut documents = seed(&first);
    tracing::debug!(documents = documents.len(), "intersection seeded");

    for set in sets {
        let index = index_by_document(&set);
        documents.retain_mut(|doc| match index.get(doc.document_uri.as_str()) {
            Some(rows) => {
                for row in rows {
                    doc.merge_entities(&row.matched_entities);
                }
                true
            }
            None => false,
        });
        tracing::debug!(documents = documents.len(), "intersection narrowed");
    }

    tracing::info!(
        documents = documents.len(),
        errors = errors.len(),
        "intersection complete"
    );
    Intersection { documents, errors }
}

/// Promote the seed set to documents. Repeated rows for one document collapse
/// into the first, which keeps its position and metadata.
fn seed(set: &ResultSet) -> Vec<Document> {
    let mut documents: Vec<Document> = Vec::with_capacity(set.len());
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(set.len());
    for row in set {
        match positions.get(row.document_uri.as_str()).copied() {
            Some(at) => documents[at].merge_entities(&row.matched_entities),
            None => {
                positions.insert(row.document_uri.as_str(), documents.len());
                documents.push(Document::from_partial(row));
            }
        }
    }
    documents
}

fn index_by_document(set: &ResultSet) -> HashMap<&str, Vec<&PartialDocument>> {
    let mut index: HashMap<&str, Vec<&PartialDocument>> = HashMap::with_capacity(set.len());
    for row in set {
        index.entry(row.document_uri.as_str()).or_default().push(row);
    }
    index
}
